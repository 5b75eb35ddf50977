use deckplay::{
    DeckBuilder, FlipAxis, FragmentAnimation, Key, PlaybackSession, SessionEvent, SessionOpts,
    SlideBuilder, SpringPreset, VirtualScheduler, flip, fragment_list, linear_timing,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let deck = DeckBuilder::new(deckplay::Canvas::default())
        .slide(
            SlideBuilder::new()
                .name("intro")
                .fragments(fragment_list(1, 3, FragmentAnimation::SlideUp, SpringPreset::Bouncy)),
        )
        .transition(flip(FlipAxis::Horizontal), Some(linear_timing(600.0)))
        .slide(SlideBuilder::new().name("outro"))
        .build()?;

    let opts = SessionOpts::default().with_frame_interval(100.0);
    let mut session = PlaybackSession::new(deck, opts, VirtualScheduler::new())?;

    for key in [Key::ArrowRight, Key::Space, Key::Enter, Key::ArrowRight] {
        for event in session.handle_key(key) {
            if let SessionEvent::Navigated { to, .. } = event {
                println!("-> slide {} fragment {}", to.slide, to.fragment);
            }
        }
    }

    while session.engine().is_transitioning() {
        session.run_for(100.0);
        let frame = session.frame();
        for layer in &frame.layers {
            println!(
                "t={:>4}ms slide {} z={} {}",
                frame.time_ms,
                layer.slide,
                layer.z_index,
                layer.style.to_css()
            );
        }
    }

    Ok(())
}
