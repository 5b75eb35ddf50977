//! deckplay drives playback of slide presentations.
//!
//! It decides which slide and fragment (incremental reveal step) is active, computes the reveal
//! style of every fragment, and runs timed transitions between slides. It only computes *what*
//! should be on screen (progress values and style descriptors), never pixels.
//!
//! # Layers
//!
//! 1. **Animation**: [`interpolate`], [`spring`] and [`Ease`] are pure functions of their inputs.
//! 2. **Reveal**: [`FragmentSpec::reveal`] maps `(current fragment, threshold, spring)` to a
//!    [`FragmentStyle`]. Fragment index is the time axis, so output is replayable during export.
//! 3. **Navigation**: [`Navigator`] is the total state machine over [`PlaybackState`].
//! 4. **Transitions**: [`TransitionEngine`] samples a [`TransitionTiming`] on wall-clock frames
//!    whenever the slide index changes.
//! 5. **Session**: [`PlaybackSession`] owns all of the above plus [`Autoplay`], driven by a
//!    [`Scheduler`]. [`VirtualScheduler`] runs the same loop on virtual time.
//!
//! Decks are assembled once, either with [`DeckBuilder`] or from JSON via [`Deck::from_json`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod deck;
mod foundation;
mod playback;
mod reveal;
mod runtime;
mod session;
mod transition;

pub use animation::ease::{Curve, Ease};
pub use animation::interpolate::{Extrapolate, InterpolateOptions, Interpolation, interpolate};
pub use animation::spring::{
    DampingRegime, MAX_SETTLE_FRAGMENTS, SETTLE_EPSILON, SpringConfig, SpringOptions,
    SpringPreset, TIME_SCALE, normalized_spring_curve, spring, spring_duration, spring_step,
};
pub use deck::builder::{DeckBuilder, DeckItem, SlideBuilder};
pub use deck::defs::{DeckDef, FragmentDef, ItemDef, SlideDef, SpringDef, TimingDef, TransitionDef};
pub use deck::model::{Deck, SlideSpec};
pub use foundation::core::{Canvas, FragmentCounts, Insets, PresentationConfig, Vec2};
pub use foundation::error::{DeckError, DeckResult, RangeError};
pub use playback::autoplay::Autoplay;
pub use playback::input::{Intent, Key};
pub use playback::navigation::{NavOutcome, Navigator};
pub use playback::state::PlaybackState;
pub use reveal::fragment::{
    FragmentAnimation, FragmentSpec, FragmentStyle, FragmentTransform, SLIDE_DISTANCE,
    fragment_list, reveal, style_for,
};
pub use runtime::clock::{Clock, ManualClock, SystemClock};
pub use runtime::scheduler::{CancelToken, RealtimeScheduler, Scheduler, VirtualScheduler, Wake};
pub use session::export::{StepSnapshot, export_steps, sample_transition};
pub use session::frame::{RenderedLayer, SessionFrame};
pub use session::opts::SessionOpts;
pub use session::player::{PlaybackSession, SessionEvent};
pub use transition::descriptor::{TransitionDescriptor, find_transition};
pub use transition::engine::{
    ActiveTransition, DEFAULT_FRAME_INTERVAL_MS, LayerRole, TransitionEngine, TransitionEvent,
    TransitionLayer, TransitionPhase,
};
pub use transition::presentation::{
    DEFAULT_PERSPECTIVE_PX, FlipAxis, LayerStyle, LayerTransform, SlideDirection,
    TransitionPresentation, WipeDirection, fade, flip, slide, wipe,
};
pub use transition::timing::{
    DEFAULT_DURATION_MS, DEFAULT_SPRING_DURATION_MS, DEFAULT_SPRING_TIMING, NamedEasing,
    TransitionTiming, eased_timing, linear_timing, spring_timing,
};
