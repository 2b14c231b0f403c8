use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

use crate::content::{Icon, Portfolio, Profile, Project, SkillGroup};
use crate::motion::{Entrance, LoopAnimation, Path, Spring, SpringPoint};
use crate::scatter::{placement_rng, scatter};
use crate::theme::{Theme, DARK_CLASS};
use crate::view::{Pointer, ViewAction, ViewState};

const BLOB_ANIMATION: &str = "blob-drift";
const ICON_ANIMATION: &str = "icon-drift";
const BLOB_COUNT: usize = 3;
const FRAME_SECONDS: f64 = 1.0 / 60.0;
const REVEAL_THRESHOLD: f64 = 0.15;

fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("data-theme", theme.as_str());
    let classes = root.class_list();
    let _ = classes.remove_1(DARK_CLASS);
    if let Some(class) = theme.root_class() {
        let _ = classes.add_1(class);
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser calls back after this function returns, so the closure
    // must outlive it.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn load_portfolio() -> Portfolio {
    Portfolio::builtin().unwrap_or_else(|error| {
        gloo::console::error!(format!("portfolio content unavailable: {error}"));
        Portfolio::default()
    })
}

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    node: &NodeRef,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, RevealCallback)> {
    let Some(element) = node.cast::<Element>() else {
        revealed.set(true);
        return None;
    };

    let on_intersect = {
        let revealed = revealed.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if visible {
                    revealed.set(true);
                    observer.disconnect();
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, on_intersect))
        }
        Err(_) => {
            revealed.set(true);
            None
        }
    }
}

/// Flips to `true` the first time the referenced element scrolls into view.
#[hook]
fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let observation = observe_once(&node, revealed);
            move || {
                if let Some((observer, _on_intersect)) = observation {
                    observer.disconnect();
                }
            }
        });
    }

    (node, *revealed)
}

#[derive(Properties, PartialEq)]
pub struct BackgroundLayerProps {
    pub theme: Theme,
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(BackgroundLayer)]
pub fn background_layer(props: &BackgroundLayerProps) -> Html {
    let placements = {
        let seed = props.seed;
        use_state(move || scatter(Icon::BACKGROUND.len(), &mut placement_rng(seed)))
    };
    let keyframes = use_memo((), |_| {
        format!(
            "{} {}",
            Path::BLOB.keyframes_css(BLOB_ANIMATION),
            Path::ICON.keyframes_css(ICON_ANIMATION)
        )
    });
    let theme = props.theme;

    html! {
        <div class="background-layer" aria-hidden="true">
            <style>{ (*keyframes).clone() }</style>
            { for (0..BLOB_COUNT).map(|index| {
                let style = format!(
                    "background: {}; {}",
                    theme.blob_color(index),
                    LoopAnimation::staggered(BLOB_ANIMATION, index).css()
                );
                html! { <div class="blob" style={style} /> }
            }) }
            { for Icon::BACKGROUND.iter().zip(placements.iter()).enumerate().map(|(index, (icon, placement))| {
                let style = format!(
                    "{} {}",
                    placement.style(),
                    LoopAnimation::staggered(ICON_ANIMATION, index).css()
                );
                html! { <div class="floating-icon" style={style}>{ icon.glyph() }</div> }
            }) }
        </div>
    }
}

struct CursorMotion {
    point: SpringPoint,
    target: (f64, f64),
    frame: Option<AnimationFrame>,
    last_timestamp: Option<f64>,
}

impl CursorMotion {
    fn new(target: (f64, f64)) -> Self {
        Self {
            point: SpringPoint::at(Spring::CURSOR, target),
            target,
            frame: None,
            last_timestamp: None,
        }
    }
}

fn paint(marker: &NodeRef, (x, y): (f64, f64)) {
    if let Some(element) = marker.cast::<HtmlElement>() {
        let _ = element
            .style()
            .set_property("transform", &format!("translate3d({x:.2}px, {y:.2}px, 0)"));
    }
}

fn schedule_frame(motion: Rc<RefCell<CursorMotion>>, marker: NodeRef) -> AnimationFrame {
    request_animation_frame(move |timestamp| {
        let mut state = motion.borrow_mut();
        let dt = state
            .last_timestamp
            .map_or(FRAME_SECONDS, |last| (timestamp - last) / 1000.0);
        state.last_timestamp = Some(timestamp);

        let target = state.target;
        let settled = state.point.advance(target, dt);
        paint(&marker, state.point.position());

        state.frame = if settled {
            None
        } else {
            Some(schedule_frame(Rc::clone(&motion), marker.clone()))
        };
    })
}

fn follow(motion: &Rc<RefCell<CursorMotion>>, marker: &NodeRef, target: (f64, f64)) {
    let mut state = motion.borrow_mut();
    state.target = target;

    if prefers_reduced_motion() {
        state.point.snap(target);
        state.frame = None;
        paint(marker, target);
        return;
    }

    if state.frame.is_none() {
        state.last_timestamp = None;
        state.frame = Some(schedule_frame(Rc::clone(motion), marker.clone()));
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorFollowerProps {
    pub pointer: Pointer,
    pub theme: Theme,
}

#[function_component(CursorFollower)]
pub fn cursor_follower(props: &CursorFollowerProps) -> Html {
    let marker = use_node_ref();
    let (target_x, target_y) = props.pointer.cursor_target();
    let motion = {
        let target = (target_x, target_y);
        use_mut_ref(move || CursorMotion::new(target))
    };

    {
        let marker = marker.clone();
        let motion = motion.clone();
        use_effect_with(props.pointer, move |pointer| {
            follow(&motion, &marker, pointer.cursor_target());
            || ()
        });
    }

    {
        let motion = motion.clone();
        use_effect_with((), move |_| {
            move || {
                motion.borrow_mut().frame.take();
            }
        });
    }

    html! {
        <div
            class="cursor-layer"
            aria-hidden="true"
            style={format!("--cursor-color: {};", props.theme.cursor_color())}
        >
            <div
                ref={marker}
                class="cursor-follower"
                data-target-x={format!("{target_x:.0}")}
                data-target-y={format!("{target_y:.0}")}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub theme: Theme,
    pub monogram: AttrValue,
    pub name: AttrValue,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <a class="logo slide-in" href="#content" style={Entrance::default().css()}>
            <span class="logo-mark">
                <span class={classes!("logo-glow", props.theme.is_dark().then_some("is-dim"))} aria-hidden="true" />
                <span class="logo-monogram">{ props.monogram.clone() }</span>
            </span>
            <span class="logo-name">{ props.name.clone() }</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub theme: Theme,
    pub profile: Rc<Profile>,
    pub on_toggle: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let theme = props.theme;
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <Logo
                    theme={theme}
                    monogram={props.profile.monogram.clone()}
                    name={props.profile.name.clone()}
                />
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={theme.toggle_label()}
                    aria-pressed={theme.pressed().to_string()}
                    onclick={onclick}
                >
                    <span aria-hidden="true">{ theme.icon() }</span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Rc<Profile>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    // Resume and contact have no destination yet; they render as inert buttons.
    html! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="hero-copy">
                <h1 id="hero-heading" class="hero-title rise" style={Entrance::default().css()}>
                    { props.profile.greeting.clone() }
                </h1>
                <p class="hero-tagline rise" style={Entrance::delayed(0.2).css()}>
                    { props.profile.tagline.clone() }
                </p>
                <div class="hero-actions rise" style={Entrance::delayed(0.4).css()}>
                    <button class="button button-primary" type="button">
                        <span aria-hidden="true">{ Icon::Download.glyph() }</span>
                        {"Download Resume"}
                    </button>
                    <button class="button button-outline" type="button">
                        <span aria-hidden="true">{ Icon::Mail.glyph() }</span>
                        {"Contact Me"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let (title_ref, title_seen) = use_reveal();
    let (subtitle_ref, subtitle_seen) = use_reveal();

    html! {
        <header class="section-header">
            <h2
                id={props.id.clone()}
                ref={title_ref}
                class={classes!("section-title", "reveal", title_seen.then_some("is-visible"))}
                style={Entrance::default().css()}
            >
                { props.title.clone() }
            </h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p
                    ref={subtitle_ref}
                    class={classes!("section-subtitle", "reveal", subtitle_seen.then_some("is-visible"))}
                    style={Entrance::delayed(0.2).css()}
                >
                    { subtitle }
                </p>
            }
        </header>
    }
}

fn tag_list(tags: &[String]) -> Html {
    html! {
        <ul class="tag-list">
            { for tags.iter().map(|tag| html! { <li class="tag">{ tag.clone() }</li> }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub group: SkillGroup,
}

#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    let (node, revealed) = use_reveal();
    let group = &props.group;

    html! {
        <article
            ref={node}
            class={classes!("card", "skill-card", "reveal", revealed.then_some("is-visible"))}
            style={Entrance::default().css()}
        >
            <div class="card-heading">
                <span class="card-icon" title={group.icon.label()} aria-hidden="true">{ group.icon.glyph() }</span>
                <h3 class="card-title">{ group.title.clone() }</h3>
            </div>
            { tag_list(&group.skills) }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let (node, revealed) = use_reveal();
    let project = &props.project;

    html! {
        <article
            ref={node}
            class={classes!("card", "project-card", "reveal", revealed.then_some("is-visible"))}
            style={Entrance::default().css()}
        >
            <h3 class="card-title">{ project.title.clone() }</h3>
            <p class="card-description">{ project.description.clone() }</p>
            { tag_list(&project.tech) }
            <div class="card-links">
                <a class="card-link" href={project.demo.clone()}>
                    <span aria-hidden="true">{ Icon::ExternalLink.glyph() }</span>
                    {"Live Demo"}
                </a>
                <a class="card-link" href={project.github.clone()}>
                    <span aria-hidden="true">{ Icon::Github.glyph() }</span>
                    {"GitHub"}
                </a>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub profile: Rc<Profile>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let profile = &props.profile;

    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <p>{ format!("© {} {}", profile.year, profile.name) }</p>
                <ul class="social-links">
                    { for profile.socials.iter().map(|social| html! {
                        <li>
                            <a class="social-link" href={social.href.clone()}>
                                <span aria-hidden="true">{ social.icon.glyph() }</span>
                                <span class="sr-only">{ social.label.clone() }</span>
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub portfolio: Rc<Portfolio>,
    /// Fixes the background icon layout; fresh per mount when absent.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let state = use_reducer(ViewState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        let pointer = Pointer::new(event.client_x(), event.client_y());
                        state.dispatch(ViewAction::PointerMoved(pointer));
                    }
                })
            });
            move || drop(listener)
        });
    }

    {
        let applied = use_mut_ref(|| false);
        use_effect_with(state.theme, move |theme| {
            if applied.replace(true) {
                apply_theme_with_transition(*theme);
            } else {
                apply_theme(*theme);
            }
            || ()
        });
    }

    // Pointer moves re-render the page; the nav bar only needs to follow the theme.
    let on_toggle = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(ViewAction::ToggleTheme))
    };
    let profile = use_memo(props.portfolio.clone(), |portfolio| portfolio.profile.clone());

    let portfolio = &props.portfolio;

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class={classes!("page-shell", state.theme.root_class())}>
                <BackgroundLayer theme={state.theme} seed={props.seed} />
                <CursorFollower pointer={state.pointer} theme={state.theme} />
                <NavBar theme={state.theme} profile={profile.clone()} on_toggle={on_toggle} />

                <main id="content" class="page-main">
                    <Hero profile={profile.clone()} />

                    <section class="section-block" aria-labelledby="skills-heading">
                        <SectionHeader
                            id="skills-heading"
                            title="Skills & Expertise"
                            subtitle="Technologies I work with"
                        />
                        <div class="card-grid skill-grid">
                            { for portfolio.skills.iter().enumerate().map(|(index, group)| html! {
                                <SkillCard key={index} group={group.clone()} />
                            }) }
                        </div>
                    </section>

                    <section class="section-block" aria-labelledby="projects-heading">
                        <SectionHeader
                            id="projects-heading"
                            title="Featured Projects"
                            subtitle="Some things I've built"
                        />
                        <div class="card-grid project-grid">
                            { for portfolio.projects.iter().enumerate().map(|(index, project)| html! {
                                <ProjectCard key={index} project={project.clone()} />
                            }) }
                        </div>
                    </section>
                </main>

                <Footer profile={profile.clone()} />
            </div>
        </>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let portfolio = use_memo((), |_| load_portfolio());

    html! { <Page portfolio={portfolio} /> }
}

#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();

    let mount = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    match mount {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SocialLink;

    fn profile() -> Profile {
        Profile {
            name: "Grace Hopper".to_string(),
            monogram: "GH".to_string(),
            greeting: "Hi, I'm Grace".to_string(),
            tagline: "Compilers | Navy".to_string(),
            year: 1952,
            socials: vec![SocialLink {
                icon: Icon::Mail,
                label: "Email".to_string(),
                href: "mailto:grace@example.com".to_string(),
            }],
        }
    }

    fn nav_props(profile: &Rc<Profile>, on_toggle: &Callback<()>) -> NavBarProps {
        NavBarProps {
            theme: Theme::Light,
            profile: Rc::clone(profile),
            on_toggle: on_toggle.clone(),
        }
    }

    fn skill_group(title: &str, skills: &[&str]) -> SkillGroup {
        SkillGroup {
            title: title.to_string(),
            icon: Icon::Code,
            skills: skills.iter().map(ToString::to_string).collect(),
        }
    }

    async fn render_page(portfolio: Portfolio) -> String {
        yew::ServerRenderer::<Page>::with_props(move || PageProps {
            portfolio: Rc::new(portfolio),
            seed: Some(7),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn assert_in_order(html: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            let found = html[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("`{needle}` missing or out of order"));
            from += found + needle.len();
        }
    }

    #[tokio::test]
    async fn builtin_page_shows_every_group_and_project() {
        let html = render_page(Portfolio::builtin().expect("built-in content parses")).await;

        assert_eq!(html.matches("skill-card").count(), 4);
        assert_in_order(&html, &[">Frontend<", ">Backend<", ">Database<", ">Tools<"]);
        assert_eq!(html.matches("project-card").count(), 1);
        assert_in_order(
            &html,
            &[
                ">AI Social Media Detector<",
                ">Python<",
                ">TensorFlow<",
                ">React<",
                ">Node.js<",
                ">Live Demo<",
            ],
        );
    }

    #[tokio::test]
    async fn empty_lists_render_empty_sections() {
        let html = render_page(Portfolio {
            profile: profile(),
            skills: Vec::new(),
            projects: Vec::new(),
        })
        .await;

        assert!(html.contains("skill-grid"));
        assert!(html.contains("project-grid"));
        assert!(html.contains("Featured Projects"));
        assert_eq!(html.matches("skill-card").count(), 0);
        assert_eq!(html.matches("project-card").count(), 0);
    }

    #[tokio::test]
    async fn skill_cards_follow_input_order() {
        let skills: Vec<SkillGroup> = (0..5)
            .map(|index| skill_group(&format!("Group {index}"), &["Rust"]))
            .collect();
        let html = render_page(Portfolio {
            profile: profile(),
            skills,
            projects: Vec::new(),
        })
        .await;

        assert_eq!(html.matches("skill-card").count(), 5);
        assert_in_order(
            &html,
            &[">Group 0<", ">Group 1<", ">Group 2<", ">Group 3<", ">Group 4<"],
        );
    }

    #[tokio::test]
    async fn page_starts_light_with_profile_details() {
        let html = render_page(Portfolio {
            profile: profile(),
            skills: vec![skill_group("Languages", &["COBOL"])],
            projects: Vec::new(),
        })
        .await;

        assert!(html.contains(r#"aria-label="Switch to dark theme""#));
        assert!(html.contains(r#"aria-pressed="false""#));
        assert!(!html.contains(r#"class="page-shell dark""#));
        assert!(html.contains(">GH<"));
        assert!(html.contains("© 1952 Grace Hopper"));
        assert!(html.contains(r#"href="mailto:grace@example.com""#));
        assert!(html.contains(">Download Resume<"));
        assert!(html.contains(r#"class="logo slide-in""#));
        assert!(!html.contains(r#"class="logo rise""#));
    }

    #[test]
    fn nav_bar_props_are_equal_only_for_the_same_callback() {
        let shared = Rc::new(profile());
        let on_toggle = Callback::from(|_: ()| ());

        assert!(nav_props(&shared, &on_toggle) == nav_props(&shared, &on_toggle));

        let rebuilt = Callback::from(|_: ()| ());
        assert!(nav_props(&shared, &on_toggle) != nav_props(&shared, &rebuilt));
    }

    #[tokio::test]
    async fn cursor_follower_is_centred_on_the_pointer() {
        let html = yew::ServerRenderer::<CursorFollower>::with_props(|| CursorFollowerProps {
            pointer: Pointer::new(100, 60),
            theme: Theme::Dark,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"data-target-x="84""#));
        assert!(html.contains(r#"data-target-y="44""#));
        assert!(html.contains("--cursor-color: #E63946;"));
    }

    #[tokio::test]
    async fn background_draws_three_blobs_and_seven_icons() {
        let html = yew::ServerRenderer::<BackgroundLayer>::with_props(|| BackgroundLayerProps {
            theme: Theme::Dark,
            seed: Some(11),
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches(r#"class="blob""#).count(), 3);
        assert_eq!(html.matches(r#"class="floating-icon""#).count(), 7);
        assert!(html.contains("background: #1e40af40;"));
        assert!(html.contains("animation: icon-drift 20s linear -30s infinite;"));
        assert!(html.contains("@keyframes blob-drift"));
    }

    #[tokio::test]
    async fn seeded_background_is_repeatable() {
        async fn render(seed: u64) -> String {
            yew::ServerRenderer::<BackgroundLayer>::with_props(move || BackgroundLayerProps {
                theme: Theme::Light,
                seed: Some(seed),
            })
            .hydratable(false)
            .render()
            .await
        }

        assert_eq!(render(3).await, render(3).await);
        assert_ne!(render(3).await, render(4).await);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::time::Duration;

    use wasm_bindgen_test::*;
    use web_sys::{Document, MouseEventInit};
    use yew::platform::time::sleep;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SETTLE: Duration = Duration::from_millis(150);

    fn document() -> Document {
        window()
            .and_then(|w| w.document())
            .expect("test runs in a document")
    }

    fn mount_point() -> Element {
        let document = document();
        let root = document.create_element("div").expect("create mount point");
        document
            .body()
            .expect("document has a body")
            .append_child(&root)
            .expect("attach mount point");
        root
    }

    fn builtin_props() -> PageProps {
        PageProps {
            portfolio: Rc::new(Portfolio::builtin().expect("built-in content parses")),
            seed: Some(1),
        }
    }

    fn move_pointer(x: i32, y: i32) {
        let init = MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        init.set_bubbles(true);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init)
            .expect("build mousemove");
        window()
            .expect("test runs in a window")
            .dispatch_event(&event)
            .expect("dispatch mousemove");
    }

    fn target_x(root: &Element) -> Option<String> {
        root.query_selector(".cursor-follower")
            .ok()
            .flatten()
            .and_then(|marker| marker.get_attribute("data-target-x"))
    }

    fn root_is_dark() -> bool {
        document()
            .document_element()
            .map(|root| root.class_list().contains(DARK_CLASS))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    async fn pointer_listener_follows_mount_and_unmount() {
        let root = mount_point();
        let handle = yew::Renderer::<Page>::with_root_and_props(root.clone(), builtin_props()).render();
        sleep(SETTLE).await;
        assert_eq!(target_x(&root).as_deref(), Some("-16"));

        move_pointer(100, 60);
        sleep(SETTLE).await;
        assert_eq!(target_x(&root).as_deref(), Some("84"));

        handle.destroy();
        sleep(SETTLE).await;
        assert!(target_x(&root).is_none());

        move_pointer(300, 200);
        sleep(SETTLE).await;
        assert!(target_x(&root).is_none());
        assert_eq!(root.child_element_count(), 0);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn toggle_marks_and_unmarks_the_document_root() {
        let root = mount_point();
        let handle = yew::Renderer::<Page>::with_root_and_props(root.clone(), builtin_props()).render();
        sleep(SETTLE).await;
        assert!(!root_is_dark());

        let toggle = root
            .query_selector(".theme-toggle")
            .ok()
            .flatten()
            .and_then(|button| button.dyn_into::<HtmlElement>().ok())
            .expect("page renders a theme toggle");

        toggle.click();
        sleep(SETTLE).await;
        assert!(root_is_dark());
        assert_eq!(toggle.get_attribute("aria-pressed").as_deref(), Some("true"));

        toggle.click();
        sleep(SETTLE).await;
        assert!(!root_is_dark());
        assert_eq!(toggle.get_attribute("aria-pressed").as_deref(), Some("false"));

        handle.destroy();
        root.remove();
    }
}
