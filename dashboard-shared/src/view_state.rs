//! View-mode state machine for the dashboard.
//!
//! The original UI spread this logic over a pile of DOM click handlers; here
//! it is a single pure transition function so it can be driven (and tested)
//! without a live page. The frontend feeds it [`ViewCommand`]s and executes
//! the [`Effect`]s it emits.

use thiserror::Error;

/// Which top-level surface is showing. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Camera,
    Video,
    Analysis,
}

/// Zone sub-mode within the video surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMode {
    None,
    Drawing,
    Previewing,
}

/// User navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    ShowCamera,
    ShowVideo,
    /// Activate analysis, or stop it if it is already running. A second
    /// activation stops the poller rather than queueing a restart.
    ToggleAnalysis,
    StartDrawing,
    StartPreview,
}

/// Side effects the controller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StopAnalysis,
    StartAnalysis,
    LoadZones,
    Notice(&'static str),
}

/// A rejected command; state is left as documented per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("{0}")]
    NoVideo(&'static str),
}

/// The `{Camera, Video, Analysis} x {None, Drawing, Previewing}` machine.
///
/// `analysis_running` flips false immediately when a transition emits
/// [`Effect::StopAnalysis`]; starting is asynchronous, so the controller
/// reports the outcome back via [`ModeMachine::analysis_started`] or
/// [`ModeMachine::start_failed`].
#[derive(Debug, Clone)]
pub struct ModeMachine {
    view: ViewMode,
    zone: ZoneMode,
    video_loaded: bool,
    analysis_running: bool,
}

impl Default for ModeMachine {
    /// The dashboard boots showing the video surface.
    fn default() -> Self {
        Self {
            view: ViewMode::Video,
            zone: ZoneMode::None,
            video_loaded: false,
            analysis_running: false,
        }
    }
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn zone_mode(&self) -> ZoneMode {
        self.zone
    }

    pub fn has_video(&self) -> bool {
        self.video_loaded
    }

    pub fn is_analysis_running(&self) -> bool {
        self.analysis_running
    }

    pub fn apply(&mut self, cmd: ViewCommand) -> Result<Vec<Effect>, ModeError> {
        match cmd {
            ViewCommand::ShowCamera => {
                let mut effects = self.leave_analysis();
                self.view = ViewMode::Camera;
                self.zone = ZoneMode::None;
                effects.push(Effect::Notice("Camera feature is not yet implemented."));
                Ok(effects)
            }
            ViewCommand::ShowVideo => {
                let effects = self.leave_analysis();
                self.view = ViewMode::Video;
                self.zone = ZoneMode::None;
                Ok(effects)
            }
            ViewCommand::ToggleAnalysis => {
                self.zone = ZoneMode::None;
                if self.analysis_running {
                    self.view = ViewMode::Analysis;
                    self.analysis_running = false;
                    return Ok(vec![Effect::StopAnalysis]);
                }
                if !self.video_loaded {
                    // Fall back to the video surface, as a failed activation does.
                    self.view = ViewMode::Video;
                    return Err(ModeError::NoVideo(
                        "Upload a video before starting analysis.",
                    ));
                }
                self.view = ViewMode::Analysis;
                Ok(vec![Effect::StartAnalysis])
            }
            ViewCommand::StartDrawing => {
                if !self.video_loaded {
                    return Err(ModeError::NoVideo("Upload a video first to create a zone."));
                }
                let effects = self.leave_analysis();
                self.view = ViewMode::Video;
                self.zone = ZoneMode::Drawing;
                Ok(effects)
            }
            ViewCommand::StartPreview => {
                if !self.video_loaded {
                    return Err(ModeError::NoVideo(
                        "Upload a video first to preview zones.",
                    ));
                }
                let mut effects = self.leave_analysis();
                self.view = ViewMode::Video;
                self.zone = ZoneMode::Previewing;
                effects.push(Effect::LoadZones);
                Ok(effects)
            }
        }
    }

    /// A video became available (or was replaced).
    pub fn set_video_loaded(&mut self, loaded: bool) {
        self.video_loaded = loaded;
    }

    /// The backend accepted the start request and polling began.
    pub fn analysis_started(&mut self) {
        self.analysis_running = true;
    }

    /// Polling stopped for any reason (toggle, stream end, failure).
    pub fn analysis_stopped(&mut self) {
        self.analysis_running = false;
    }

    /// The backend rejected the start request; return to the video surface.
    pub fn start_failed(&mut self) {
        self.analysis_running = false;
        self.view = ViewMode::Video;
    }

    /// The drag gesture finished (or was discarded); leave the sub-mode.
    pub fn clear_zone_mode(&mut self) {
        self.zone = ZoneMode::None;
    }

    fn leave_analysis(&mut self) -> Vec<Effect> {
        if self.analysis_running {
            self.analysis_running = false;
            vec![Effect::StopAnalysis]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_with_video() -> ModeMachine {
        let mut m = ModeMachine::new();
        m.set_video_loaded(true);
        m
    }

    #[test]
    fn boots_on_video_surface_with_no_sub_mode() {
        let m = ModeMachine::new();
        assert_eq!(m.view(), ViewMode::Video);
        assert_eq!(m.zone_mode(), ZoneMode::None);
        assert!(!m.is_analysis_running());
    }

    #[test]
    fn analysis_toggle_is_idempotent() {
        let mut m = machine_with_video();

        let first = m.apply(ViewCommand::ToggleAnalysis).unwrap();
        assert_eq!(first, vec![Effect::StartAnalysis]);
        m.analysis_started();

        let second = m.apply(ViewCommand::ToggleAnalysis).unwrap();
        assert_eq!(second, vec![Effect::StopAnalysis]);
        assert!(!m.is_analysis_running());

        // A third toggle starts again; nothing was queued.
        let third = m.apply(ViewCommand::ToggleAnalysis).unwrap();
        assert_eq!(third, vec![Effect::StartAnalysis]);
    }

    #[test]
    fn analysis_without_video_is_rejected_back_to_video_view() {
        let mut m = ModeMachine::new();
        let err = m.apply(ViewCommand::ToggleAnalysis).unwrap_err();
        assert!(matches!(err, ModeError::NoVideo(_)));
        assert_eq!(m.view(), ViewMode::Video);
        assert!(!m.is_analysis_running());
    }

    #[test]
    fn drawing_requires_a_loaded_video_and_changes_nothing_otherwise() {
        let mut m = ModeMachine::new();
        assert!(m.apply(ViewCommand::StartDrawing).is_err());
        assert_eq!(m.view(), ViewMode::Video);
        assert_eq!(m.zone_mode(), ZoneMode::None);

        assert!(m.apply(ViewCommand::StartPreview).is_err());
        assert_eq!(m.zone_mode(), ZoneMode::None);
    }

    #[test]
    fn drawing_and_preview_enter_their_sub_modes() {
        let mut m = machine_with_video();
        m.apply(ViewCommand::StartDrawing).unwrap();
        assert_eq!(m.zone_mode(), ZoneMode::Drawing);
        assert_eq!(m.view(), ViewMode::Video);

        let effects = m.apply(ViewCommand::StartPreview).unwrap();
        assert_eq!(m.zone_mode(), ZoneMode::Previewing);
        assert!(effects.contains(&Effect::LoadZones));
    }

    #[test]
    fn leaving_analysis_view_stops_the_poller_and_clears_sub_mode() {
        let mut m = machine_with_video();
        m.apply(ViewCommand::ToggleAnalysis).unwrap();
        m.analysis_started();

        let effects = m.apply(ViewCommand::ShowVideo).unwrap();
        assert_eq!(effects, vec![Effect::StopAnalysis]);
        assert_eq!(m.view(), ViewMode::Video);
        assert_eq!(m.zone_mode(), ZoneMode::None);
        assert!(!m.is_analysis_running());
    }

    #[test]
    fn camera_view_raises_a_notice() {
        let mut m = ModeMachine::new();
        let effects = m.apply(ViewCommand::ShowCamera).unwrap();
        assert!(matches!(effects.as_slice(), [Effect::Notice(_)]));
        assert_eq!(m.view(), ViewMode::Camera);
    }

    #[test]
    fn failed_backend_start_reverts_to_video_view() {
        let mut m = machine_with_video();
        m.apply(ViewCommand::ToggleAnalysis).unwrap();
        m.start_failed();
        assert_eq!(m.view(), ViewMode::Video);
        assert!(!m.is_analysis_running());
    }

    #[test]
    fn entering_drawing_while_analysis_runs_stops_it() {
        let mut m = machine_with_video();
        m.apply(ViewCommand::ToggleAnalysis).unwrap();
        m.analysis_started();

        let effects = m.apply(ViewCommand::StartDrawing).unwrap();
        assert_eq!(effects, vec![Effect::StopAnalysis]);
        assert_eq!(m.zone_mode(), ZoneMode::Drawing);
    }
}
