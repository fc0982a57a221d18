//! Headless replay of recorded wheel events.

use std::path::Path;

use orbit_input::WheelRecording;
use orbit_scroll::ScrollOutcome;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::showcase::Showcase;

/// Tally of a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub fired: usize,
    pub dropped: usize,
    pub resets: usize,
    pub final_index: u32,
    /// Planet facing the camera after the last transition.
    pub front_planet: Option<usize>,
}

/// Parse a recording and reject timestamps that go backwards.
pub fn parse_recording(text: &str) -> Result<WheelRecording, AppError> {
    let recording: WheelRecording = ron::from_str(text).map_err(AppError::ReplayParse)?;
    if let Some(index) = recording.first_out_of_order() {
        return Err(AppError::ReplayOutOfOrder { index });
    }
    Ok(recording)
}

pub fn load_recording(path: &Path) -> Result<WheelRecording, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ReplayRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_recording(&text)
}

/// Feed every recorded event through the showcase in order.
#[instrument(skip_all, fields(events = recording.events.len(), span_ms = recording.span_ms()))]
pub fn replay(showcase: &mut Showcase, recording: &WheelRecording) -> ReplaySummary {
    let mut summary = ReplaySummary {
        events: recording.events.len(),
        ..ReplaySummary::default()
    };

    for event in &recording.events {
        match showcase.on_wheel(*event) {
            ScrollOutcome::Fired { reset, .. } => {
                summary.fired += 1;
                if reset {
                    summary.resets += 1;
                }
            }
            ScrollOutcome::Dropped { .. } => summary.dropped += 1,
        }
    }
    summary.final_index = showcase.controller().cycle_index();
    summary.front_planet = showcase.front_planet();

    info!(
        fired = summary.fired,
        dropped = summary.dropped,
        resets = summary.resets,
        final_index = summary.final_index,
        front_planet = ?summary.front_planet,
        heading_offset = showcase.animated().heading_offset(),
        "Replay finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_config::Config;

    const WALKTHROUGH: &str = "(events: [
        (delta_y: 5.0, timestamp_ms: 0),
        (delta_y: 5.0, timestamp_ms: 500),
        (delta_y: 5.0, timestamp_ms: 2100),
        (delta_y: 5.0, timestamp_ms: 4300),
        (delta_y: 5.0, timestamp_ms: 6500),
    ])";

    #[test]
    fn test_walkthrough_summary() {
        let recording = parse_recording(WALKTHROUGH).unwrap();
        let mut showcase = Showcase::new(&Config::default()).unwrap();
        let summary = replay(&mut showcase, &recording);
        assert_eq!(
            summary,
            ReplaySummary {
                events: 5,
                fired: 4,
                dropped: 1,
                resets: 1,
                final_index: 0,
                front_planet: Some(1),
            }
        );
    }

    #[test]
    fn test_out_of_order_rejected() {
        let text = "(events: [(delta_y: 1.0, timestamp_ms: 10), (delta_y: 1.0, timestamp_ms: 5)])";
        assert!(matches!(
            parse_recording(text),
            Err(AppError::ReplayOutOfOrder { index: 1 })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            parse_recording("not ron"),
            Err(AppError::ReplayParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.ron");
        std::fs::write(&path, WALKTHROUGH).unwrap();
        assert_eq!(load_recording(&path).unwrap().events.len(), 5);

        let missing = load_recording(&dir.path().join("missing.ron"));
        assert!(matches!(missing, Err(AppError::ReplayRead { .. })));
    }

    #[test]
    fn test_bundled_demo_matches_walkthrough() {
        let recording = parse_recording(include_str!("../../../demos/scroll_walkthrough.ron")).unwrap();
        let mut showcase = Showcase::new(&Config::default()).unwrap();
        let summary = replay(&mut showcase, &recording);
        assert_eq!((summary.fired, summary.dropped, summary.resets), (4, 1, 1));
        assert_eq!(summary.front_planet, Some(1));
    }

    #[test]
    fn test_empty_recording() {
        let recording = parse_recording("()").unwrap();
        let mut showcase = Showcase::new(&Config::default()).unwrap();
        let summary = replay(&mut showcase, &recording);
        assert_eq!(summary.fired, 0);
        assert_eq!(summary.front_planet, Some(1));
    }
}
