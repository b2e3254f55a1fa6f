use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a region that must overlap the viewport before it counts as
/// entered.
const ENTER_THRESHOLD: f64 = 0.1;
/// The detection boundary extends 50px past the bottom edge so the entrance
/// is already underway when the region scrolls in.
const ENTER_MARGIN: &str = "0px 0px -50px 0px";
const TRANSITION_SECS: f64 = 0.6;
/// Offset between consecutive children of a `StaggerReveal`.
const STAGGER_STEP_SECS: f64 = 0.15;

/// Visual state of one revealed region. Only ever moves `Hidden -> Visible`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn initial(reduced_motion: bool) -> Self {
        if reduced_motion {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }
}

/// Entrance profiles. Unrecognized names fall back to `Fade`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Animation {
    #[default]
    Fade,
    SlideUp,
    SlideLeft,
    SlideRight,
}

impl Animation {
    pub fn parse(name: &str) -> Self {
        match name {
            "fade" => Animation::Fade,
            "slide-up" => Animation::SlideUp,
            "slide-left" => Animation::SlideLeft,
            "slide-right" => Animation::SlideRight,
            _ => Animation::Fade,
        }
    }

    fn hidden_transform(self) -> &'static str {
        match self {
            Animation::Fade => "none",
            Animation::SlideUp => "translateY(50px)",
            Animation::SlideLeft => "translateX(50px)",
            Animation::SlideRight => "translateX(-50px)",
        }
    }

    pub fn hidden_style(self) -> String {
        format!(
            "opacity: 0; transform: {}; will-change: transform, opacity;",
            self.hidden_transform()
        )
    }

    /// `delay` (seconds, negative values clamped to zero) is folded into the
    /// transition so a late entrance needs no extra render pass.
    pub fn visible_style(self, delay: f64) -> String {
        let delay = delay.max(0.0);
        format!(
            "opacity: 1; transform: none; transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
            d = TRANSITION_SECS,
        )
    }

    pub fn style_for(self, state: RevealState, delay: f64) -> String {
        match state {
            RevealState::Hidden => self.hidden_style(),
            RevealState::Visible => self.visible_style(delay),
        }
    }
}

/// Entrance offset for the `index`-th child of a staggered group.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECS
}

/// Handle for one live viewport registration.
pub struct Subscription {
    action: Option<Box<dyn FnMut()>>,
    cancelled: bool,
}

impl Subscription {
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Subscription {
            action: Some(Box::new(action)),
            cancelled: false,
        }
    }

    /// A subscription with nothing to tear down.
    pub fn empty() -> Self {
        Subscription {
            action: None,
            cancelled: true,
        }
    }

    /// Idempotent. The action box is retained after the call: for the
    /// intersection notifier it owns the wasm closure the browser may be
    /// invoking us from, which must not be freed mid-call.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Visibility-tracking capability. `on_enter` may fire any number of times
/// until the returned subscription is cancelled; one-shot semantics live in
/// `RevealFlow`.
pub trait ViewportNotifier {
    fn observe(&self, target: &NodeRef, on_enter: Callback<()>) -> Subscription;
}

/// Production notifier backed by the browser's `IntersectionObserver`.
pub struct IntersectionNotifier;

impl ViewportNotifier for IntersectionNotifier {
    fn observe(&self, target: &NodeRef, on_enter: Callback<()>) -> Subscription {
        let Some(element) = target.cast::<Element>() else {
            // No concrete region to track; reveal right away.
            on_enter.emit(());
            return Subscription::empty();
        };

        let on_enter_cb = on_enter.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_enter_cb.emit(());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ENTER_THRESHOLD));
        options.set_root_margin(ENTER_MARGIN);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                Subscription::new(move || {
                    observer.disconnect();
                    // `callback` lives in this box until the subscription is
                    // dropped at teardown; the observer may be calling through
                    // it right now.
                    let _ = &callback;
                })
            }
            Err(err) => {
                warn!("viewport tracking unavailable, revealing immediately: {:?}", err);
                on_enter.emit(());
                Subscription::empty()
            }
        }
    }
}

/// One reveal instance: owns the state value and at most one live
/// observation. The state transitions to `Visible` exactly once, on the
/// first entered signal, and the observation is cancelled at that moment;
/// `stop` covers teardown before any signal arrived.
pub struct RevealFlow {
    state: Rc<Cell<RevealState>>,
    subscription: Rc<RefCell<Subscription>>,
}

impl RevealFlow {
    /// `on_reveal` fires at most once, on the `Hidden -> Visible` transition.
    /// With `reduced_motion` set the content starts `Visible` and no
    /// observation is ever registered.
    pub fn start(
        notifier: &dyn ViewportNotifier,
        target: &NodeRef,
        reduced_motion: bool,
        on_reveal: Callback<()>,
    ) -> Self {
        let state = Rc::new(Cell::new(RevealState::initial(reduced_motion)));
        let subscription = Rc::new(RefCell::new(Subscription::empty()));

        if state.get() == RevealState::Hidden {
            let on_enter = {
                let state = state.clone();
                // Weak: the enter callback is owned by the subscription it
                // cancels, so a strong handle here would cycle and leak.
                let subscription = Rc::downgrade(&subscription);
                Callback::from(move |_| {
                    if state.get() == RevealState::Hidden {
                        state.set(RevealState::Visible);
                        on_reveal.emit(());
                    }
                    if let Some(subscription) = subscription.upgrade() {
                        subscription.borrow_mut().cancel();
                    }
                })
            };
            *subscription.borrow_mut() = notifier.observe(target, on_enter);
        }

        Self { state, subscription }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    /// Idempotent; also runs implicitly when the flow is dropped.
    pub fn stop(&self) {
        self.subscription.borrow_mut().cancel();
    }
}

/// Single read of the platform's reduced-motion preference.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Hook shared by `Reveal` and `StaggerReveal`: snapshots the motion
/// preference, runs one `RevealFlow` per mount, and mirrors its state into
/// render state.
#[hook]
fn use_reveal(node: NodeRef) -> (bool, UseStateHandle<RevealState>) {
    // Snapshot, not a subscription: a preference change applies on next mount.
    let reduced_motion = *use_state(prefers_reduced_motion);
    let state = use_state(|| RevealState::initial(reduced_motion));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let on_reveal = Callback::from(move |_| state.set(RevealState::Visible));
                let flow = RevealFlow::start(&IntersectionNotifier, &node, reduced_motion, on_reveal);
                move || flow.stop()
            },
            (),
        );
    }

    (reduced_motion, state)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// One of "fade", "slide-up", "slide-left", "slide-right".
    #[prop_or(AttrValue::Static("fade"))]
    pub animation: AttrValue,
    /// Seconds to wait before the entrance starts, once the region is in view.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps content and defers its appearance until the wrapping region scrolls
/// into view. The wrapping `div` is stable across the transition, so focus
/// and accessibility state inside the content survive the reveal.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let (reduced_motion, state) = use_reveal(node.clone());

    let style = if reduced_motion {
        None
    } else {
        Some(Animation::parse(&props.animation).style_for(*state, props.delay))
    };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerRevealProps {
    pub children: Children,
    /// Profile applied to every child.
    #[prop_or(AttrValue::Static("slide-up"))]
    pub animation: AttrValue,
    /// Base delay added before the first child's entrance.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes for each child wrapper.
    #[prop_or_default]
    pub item_class: Classes,
}

/// Container variant: one observation on the group, with each child's
/// entrance offset 0.15s from the previous one, in child order.
#[function_component(StaggerReveal)]
pub fn stagger_reveal(props: &StaggerRevealProps) -> Html {
    let node = use_node_ref();
    let (reduced_motion, state) = use_reveal(node.clone());

    let animation = Animation::parse(&props.animation);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(index, child)| {
                let style = if reduced_motion {
                    None
                } else {
                    Some(animation.style_for(*state, props.delay + stagger_delay(index)))
                };
                html! {
                    <div class={classes!("stagger-item", props.item_class.clone())} style={style}>
                        { child }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeNotifier {
        registrations: RefCell<Vec<Callback<()>>>,
        cancels: Rc<Cell<usize>>,
    }

    impl FakeNotifier {
        fn fire_enter(&self) {
            for on_enter in self.registrations.borrow().iter() {
                on_enter.emit(());
            }
        }

        fn observe_count(&self) -> usize {
            self.registrations.borrow().len()
        }

        fn cancel_count(&self) -> usize {
            self.cancels.get()
        }
    }

    impl ViewportNotifier for FakeNotifier {
        fn observe(&self, _target: &NodeRef, on_enter: Callback<()>) -> Subscription {
            self.registrations.borrow_mut().push(on_enter);
            let cancels = self.cancels.clone();
            Subscription::new(move || cancels.set(cancels.get() + 1))
        }
    }

    fn counting_callback() -> (Callback<()>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (callback, count)
    }

    #[test]
    fn reveal_fires_once_and_cancels_after_first_enter() {
        let notifier = FakeNotifier::default();
        let (on_reveal, reveals) = counting_callback();
        let flow = RevealFlow::start(&notifier, &NodeRef::default(), false, on_reveal);

        assert_eq!(flow.state(), RevealState::Hidden);
        assert_eq!(notifier.observe_count(), 1);

        notifier.fire_enter();
        assert_eq!(flow.state(), RevealState::Visible);
        assert_eq!(reveals.get(), 1);
        assert_eq!(notifier.cancel_count(), 1);

        // Late signals: no extra reveal, no extra deregistration.
        notifier.fire_enter();
        notifier.fire_enter();
        assert_eq!(reveals.get(), 1);
        assert_eq!(notifier.cancel_count(), 1);
    }

    #[test]
    fn visible_state_never_reverts() {
        let notifier = FakeNotifier::default();
        let (on_reveal, _reveals) = counting_callback();
        let flow = RevealFlow::start(&notifier, &NodeRef::default(), false, on_reveal);

        notifier.fire_enter();
        flow.stop();
        notifier.fire_enter();
        assert_eq!(flow.state(), RevealState::Visible);
    }

    #[test]
    fn reduced_motion_is_visible_without_observation() {
        let notifier = FakeNotifier::default();
        let (on_reveal, reveals) = counting_callback();
        let flow = RevealFlow::start(&notifier, &NodeRef::default(), true, on_reveal);

        assert_eq!(flow.state(), RevealState::Visible);
        assert_eq!(notifier.observe_count(), 0);
        assert_eq!(reveals.get(), 0);
    }

    #[test]
    fn teardown_cancels_pending_observation_once() {
        let notifier = FakeNotifier::default();
        let flow = RevealFlow::start(&notifier, &NodeRef::default(), false, Callback::noop());

        assert_eq!(flow.state(), RevealState::Hidden);
        flow.stop();
        drop(flow);
        assert_eq!(notifier.cancel_count(), 1);
    }

    #[test]
    fn subscription_cancel_is_idempotent() {
        let count = Rc::new(Cell::new(0));
        let mut subscription = Subscription::new({
            let count = count.clone();
            move || count.set(count.get() + 1)
        });
        subscription.cancel();
        subscription.cancel();
        drop(subscription);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unknown_profile_name_falls_back_to_fade() {
        assert_eq!(Animation::parse("zoom-out"), Animation::Fade);
        assert_eq!(
            Animation::parse("zoom-out").hidden_style(),
            Animation::parse("fade").hidden_style()
        );
        assert_eq!(
            Animation::parse("zoom-out").visible_style(0.3),
            Animation::parse("fade").visible_style(0.3)
        );
    }

    #[test]
    fn slide_up_with_delay_matches_entrance_timing() {
        let animation = Animation::parse("slide-up");

        let hidden = animation.style_for(RevealState::Hidden, 0.2);
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("translateY(50px)"));

        let visible = animation.style_for(RevealState::Visible, 0.2);
        assert!(visible.contains("opacity: 1"));
        assert!(visible.contains("transform: none"));
        assert!(visible.contains("opacity 0.6s ease-out 0.2s"));
        assert!(visible.contains("transform 0.6s ease-out 0.2s"));
    }

    #[test]
    fn slide_directions_use_distinct_offsets() {
        assert!(Animation::SlideLeft.hidden_style().contains("translateX(50px)"));
        assert!(Animation::SlideRight.hidden_style().contains("translateX(-50px)"));
    }

    #[test]
    fn negative_delay_is_clamped() {
        assert_eq!(
            Animation::Fade.visible_style(-1.5),
            Animation::Fade.visible_style(0.0)
        );
    }

    #[test]
    fn stagger_offsets_follow_child_order() {
        assert_eq!(stagger_delay(0), 0.0);
        for index in 1..6 {
            let step = stagger_delay(index) - stagger_delay(index - 1);
            assert!((step - 0.15).abs() < 1e-9);
        }
        assert!(Animation::SlideUp
            .visible_style(stagger_delay(2))
            .contains("ease-out 0.3s"));
    }
}
