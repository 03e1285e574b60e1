//! The dashboard surface: view navigation, zone editing, and the live
//! analysis feed.
//!
//! All transition logic lives in `dashboard_shared::view_state`; this
//! component feeds it commands, executes the effects it emits, and owns
//! every piece of shared state (zone cache, draw stroke, chart model, poll
//! gate and timer handle). Since Yew delivers messages one at a time on the
//! single browser thread, each `update` arm completes its mutations before
//! the next repaint.

use std::collections::BTreeMap;

use dashboard_shared::alerts;
use dashboard_shared::analysis::{self, FrameOutcome, PollGate, POLL_INTERVAL_MS};
use dashboard_shared::chart::format_time_label;
use dashboard_shared::geometry::{drag_rect, drag_too_small, normalize_rect, PixelPoint};
use dashboard_shared::{
    AlertState, ApiError, ApiMessage, DashboardClient, Effect, FramePayload, ModeMachine,
    PopulationChart, ViewCommand, ViewMode, Zone, ZoneCount, ZoneMode,
};
use gloo_net::http::Request;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    FormData, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement, HtmlVideoElement, MouseEvent,
    Url,
};
use yew::prelude::*;

use crate::{chart_canvas, session, zone_canvas};

/// How long a notification banner stays up.
const NOTICE_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

struct Notice {
    id: u64,
    level: NoticeLevel,
    text: String,
}

#[derive(Properties, PartialEq)]
pub struct DashboardFrontendProps {
    pub username: String,
    pub on_logout: Callback<()>,
}

pub struct DashboardFrontend {
    client: DashboardClient,
    machine: ModeMachine,

    zones: Vec<Zone>,
    draw_stroke: Option<(PixelPoint, PixelPoint)>,
    pending_zone: Option<[PixelPoint; 4]>,

    chart: PopulationChart,
    gate: PollGate,
    poll_handle: Option<Interval>,
    current_count: u32,
    latest_zone_data: BTreeMap<String, ZoneCount>,
    alert: AlertState,
    overlay_src: Option<String>,
    heatmap_src: Option<String>,

    video_url: Option<String>,
    zone_menu_open: bool,
    notices: Vec<Notice>,
    next_notice_id: u64,

    video_ref: NodeRef,
    canvas_ref: NodeRef,
    chart_canvas_ref: NodeRef,
    file_input_ref: NodeRef,
    modal_input_ref: NodeRef,
    delete_select_ref: NodeRef,
    _resize_hook: Option<Closure<dyn FnMut()>>,
}

pub enum Msg {
    ShowCamera,
    ShowVideo,
    ToggleAnalysis,
    ToggleZoneMenu,
    StartDrawing,
    StartPreview,
    DeleteSelectedZone,

    PickVideo,
    VideoChosen(web_sys::File),
    VideoUploaded(Result<(), ApiError>),

    PointerDown(PixelPoint),
    PointerMove(PixelPoint),
    PointerUp,
    ModalSave,
    ModalCancel,

    ZonesLoaded(Vec<Zone>),
    ZoneCreated(Result<(), ApiError>),
    ZoneDeleted(Result<(), ApiError>),

    AnalysisStarted(Result<(), ApiError>),
    PollTick,
    FrameArrived(u64, Result<FramePayload, ApiError>),

    CanvasResize,
    DismissNotice(u64),
    Logout,
}

impl Component for DashboardFrontend {
    type Message = Msg;
    type Properties = DashboardFrontendProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = match session::token() {
            Some(token) => DashboardClient::for_web().with_token(token),
            None => DashboardClient::for_web(),
        };

        let link = ctx.link().clone();
        let resize_hook = Closure::<dyn FnMut()>::new(move || {
            link.send_message(Msg::CanvasResize);
        });
        if let Some(window) = web_sys::window() {
            window.set_onresize(Some(resize_hook.as_ref().unchecked_ref()));
        }

        let this = Self {
            client,
            machine: ModeMachine::new(),
            zones: Vec::new(),
            draw_stroke: None,
            pending_zone: None,
            chart: PopulationChart::new(),
            gate: PollGate::new(),
            poll_handle: None,
            current_count: 0,
            latest_zone_data: BTreeMap::new(),
            alert: AlertState::Nominal,
            overlay_src: None,
            heatmap_src: None,
            video_url: None,
            zone_menu_open: false,
            notices: Vec::new(),
            next_notice_id: 0,
            video_ref: NodeRef::default(),
            canvas_ref: NodeRef::default(),
            chart_canvas_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            modal_input_ref: NodeRef::default(),
            delete_select_ref: NodeRef::default(),
            _resize_hook: Some(resize_hook),
        };
        this.refresh_zones(ctx);
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowCamera => self.apply_command(ctx, ViewCommand::ShowCamera),
            Msg::ShowVideo => self.apply_command(ctx, ViewCommand::ShowVideo),
            Msg::ToggleAnalysis => self.apply_command(ctx, ViewCommand::ToggleAnalysis),
            Msg::StartDrawing => {
                let changed = self.apply_command(ctx, ViewCommand::StartDrawing);
                if self.machine.zone_mode() == ZoneMode::Drawing {
                    self.draw_stroke = None;
                }
                changed
            }
            Msg::StartPreview => self.apply_command(ctx, ViewCommand::StartPreview),
            Msg::ToggleZoneMenu => {
                self.zone_menu_open = !self.zone_menu_open;
                true
            }
            Msg::DeleteSelectedZone => {
                let selected = self
                    .delete_select_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default();
                if selected.is_empty() || self.zones.is_empty() {
                    self.push_notice(ctx, NoticeLevel::Error, "No zone selected.".to_string());
                    return true;
                }
                let client = self.client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::ZoneDeleted(client.delete_zone(&selected).await));
                });
                false
            }

            Msg::PickVideo => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::VideoChosen(file) => {
                if self.machine.is_analysis_running() {
                    self.stop_polling();
                }
                if let Some(old) = self.video_url.take() {
                    let _ = Url::revoke_object_url(&old);
                }
                match Url::create_object_url_with_blob(&file) {
                    Ok(url) => {
                        self.video_url = Some(url);
                        self.machine.set_video_loaded(true);
                    }
                    Err(_) => {
                        self.push_notice(
                            ctx,
                            NoticeLevel::Error,
                            "Could not open the selected file.".to_string(),
                        );
                        return true;
                    }
                }
                self.push_notice(ctx, NoticeLevel::Info, "Uploading video...".to_string());
                let client = self.client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::VideoUploaded(upload_video(&client, &file).await));
                });
                true
            }
            Msg::VideoUploaded(result) => {
                match result {
                    Ok(()) => self.push_notice(
                        ctx,
                        NoticeLevel::Success,
                        "Video uploaded. You can now use 'Zone Manipulation'.".to_string(),
                    ),
                    Err(e) => self.push_notice(
                        ctx,
                        NoticeLevel::Error,
                        format!("Video upload failed: {e}"),
                    ),
                }
                true
            }

            Msg::PointerDown(point) => {
                if self.machine.zone_mode() != ZoneMode::Drawing {
                    return false;
                }
                // Collapsed rectangle until the pointer moves.
                self.draw_stroke = Some((point, point));
                true
            }
            Msg::PointerMove(point) => {
                if self.machine.zone_mode() != ZoneMode::Drawing {
                    return false;
                }
                match &mut self.draw_stroke {
                    Some((_, end)) => {
                        *end = point;
                        true
                    }
                    None => false,
                }
            }
            Msg::PointerUp => {
                if self.machine.zone_mode() != ZoneMode::Drawing {
                    return false;
                }
                let Some((start, end)) = self.draw_stroke.take() else {
                    return false;
                };
                self.machine.clear_zone_mode();
                if drag_too_small(start, end) {
                    // A slip, not a zone; no prompt, no request.
                    return true;
                }
                self.pending_zone = Some(drag_rect(start, end));
                true
            }
            Msg::ModalSave => {
                // `take` resolves the rendezvous exactly once; a second
                // click finds nothing pending.
                let Some(corners) = self.pending_zone.take() else {
                    return false;
                };
                let name = self
                    .modal_input_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value().trim().to_string())
                    .unwrap_or_default();
                if name.is_empty() {
                    return true;
                }
                let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
                    log::warn!("zone canvas missing at save time");
                    return true;
                };
                let coordinates =
                    normalize_rect(corners, canvas.width() as f64, canvas.height() as f64);
                let client = self.client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::ZoneCreated(
                        client.create_zone(&name, coordinates).await,
                    ));
                });
                true
            }
            Msg::ModalCancel => {
                self.pending_zone = None;
                true
            }

            Msg::ZonesLoaded(zones) => {
                self.zones = zones;
                true
            }
            Msg::ZoneCreated(result) => {
                match result {
                    Ok(()) => {
                        self.push_notice(
                            ctx,
                            NoticeLevel::Success,
                            "Zone saved successfully!".to_string(),
                        );
                        self.refresh_zones(ctx);
                    }
                    Err(e) => self.push_notice(
                        ctx,
                        NoticeLevel::Error,
                        format!("Error saving zone: {e}"),
                    ),
                }
                true
            }
            Msg::ZoneDeleted(result) => {
                match result {
                    Ok(()) => {
                        self.push_notice(
                            ctx,
                            NoticeLevel::Success,
                            "Zone deleted successfully.".to_string(),
                        );
                        self.refresh_zones(ctx);
                    }
                    Err(e) => self.push_notice(
                        ctx,
                        NoticeLevel::Error,
                        format!("Error deleting zone: {e}"),
                    ),
                }
                true
            }

            Msg::AnalysisStarted(result) => {
                match result {
                    Ok(()) => {
                        self.push_notice(
                            ctx,
                            NoticeLevel::Success,
                            "Analysis started successfully.".to_string(),
                        );
                        self.chart.reset(&self.zones);
                        self.machine.analysis_started();
                        self.gate.start();
                        let link = ctx.link().clone();
                        self.poll_handle = Some(Interval::new(POLL_INTERVAL_MS, move || {
                            link.send_message(Msg::PollTick);
                        }));
                    }
                    Err(e) => {
                        self.machine.start_failed();
                        self.push_notice(
                            ctx,
                            NoticeLevel::Error,
                            format!("Failed to start analysis: {e}"),
                        );
                    }
                }
                true
            }
            Msg::PollTick => {
                if !self.gate.is_running() {
                    return false;
                }
                // Tag the fetch with the generation current at issue time.
                let generation = self.gate.generation();
                let client = self.client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::FrameArrived(generation, client.fetch_frame().await));
                });
                false
            }
            Msg::FrameArrived(generation, result) => {
                if !self.gate.accepts(generation) {
                    log::debug!("discarding stale analysis frame (generation {generation})");
                    return false;
                }
                match result {
                    Ok(payload) => self.apply_frame(ctx, payload),
                    Err(e) => {
                        log::error!("frame fetch failed: {e}");
                        self.stop_polling();
                        self.push_notice(
                            ctx,
                            NoticeLevel::Error,
                            "An error occurred during analysis.".to_string(),
                        );
                    }
                }
                true
            }

            Msg::CanvasResize => true,
            Msg::DismissNotice(id) => {
                self.notices.retain(|notice| notice.id != id);
                true
            }
            Msg::Logout => {
                session::clear();
                ctx.props().on_logout.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="layout">
                { self.view_sidebar(ctx) }
                <main class="content">
                    if self.machine.view() == ViewMode::Analysis {
                        { self.view_analysis_surface() }
                    } else {
                        { self.view_video_surface(ctx) }
                    }
                </main>
                { self.view_notices() }
                if self.pending_zone.is_some() {
                    { self.view_zone_name_modal(ctx) }
                }
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.sync_canvas_size();
        self.paint();
        if self.pending_zone.is_some() {
            if let Some(input) = self.modal_input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.poll_handle = None;
        if let Some(window) = web_sys::window() {
            window.set_onresize(None);
        }
        if let Some(url) = self.video_url.take() {
            let _ = Url::revoke_object_url(&url);
        }
    }
}

impl DashboardFrontend {
    /// Run a navigation command through the machine and execute its effects;
    /// a rejected command surfaces as an error banner with no other change.
    fn apply_command(&mut self, ctx: &Context<Self>, cmd: ViewCommand) -> bool {
        match self.machine.apply(cmd) {
            Ok(effects) => {
                for effect in effects {
                    match effect {
                        Effect::StopAnalysis => self.stop_polling(),
                        Effect::StartAnalysis => self.begin_analysis(ctx),
                        Effect::LoadZones => self.refresh_zones(ctx),
                        Effect::Notice(text) => {
                            self.push_notice(ctx, NoticeLevel::Info, text.to_string())
                        }
                    }
                }
            }
            Err(e) => self.push_notice(ctx, NoticeLevel::Error, e.to_string()),
        }
        true
    }

    fn begin_analysis(&mut self, ctx: &Context<Self>) {
        let client = self.client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::AnalysisStarted(client.start_analysis().await));
        });
    }

    /// Tear down the schedule and reset the displayed totals. Dropping the
    /// `Interval` handle cancels it; bumping the gate generation makes any
    /// in-flight response stale.
    fn stop_polling(&mut self) {
        self.poll_handle = None;
        self.gate.stop();
        self.machine.analysis_stopped();
        self.current_count = 0;
    }

    fn apply_frame(&mut self, ctx: &Context<Self>, payload: FramePayload) {
        match analysis::classify(payload) {
            FrameOutcome::Finished => {
                self.stop_polling();
                self.push_notice(
                    ctx,
                    NoticeLevel::Success,
                    "Video analysis finished.".to_string(),
                );
            }
            FrameOutcome::Failed(message) => {
                log::error!("analysis reported an error: {message}");
                self.stop_polling();
                self.push_notice(
                    ctx,
                    NoticeLevel::Error,
                    "An error occurred during analysis.".to_string(),
                );
            }
            FrameOutcome::Update(update) => {
                self.current_count = update.current_count;
                self.alert = alerts::evaluate(&update.zone_data);
                self.chart
                    .record(&self.zones, &update.zone_data, now_label());
                self.overlay_src = update
                    .frame_base64
                    .map(|b64| format!("data:image/jpeg;base64,{b64}"));
                self.heatmap_src = update
                    .heatmap_base64
                    .map(|b64| format!("data:image/jpeg;base64,{b64}"));
                self.latest_zone_data = update.zone_data;
            }
        }
    }

    fn refresh_zones(&self, ctx: &Context<Self>) {
        let client = self.client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match client.list_zones().await {
                Ok(zones) => link.send_message(Msg::ZonesLoaded(zones)),
                // Cache left untouched; the dashboard keeps working.
                Err(e) => log::warn!("failed to load zones: {e}"),
            }
        });
    }

    fn push_notice(&mut self, ctx: &Context<Self>, level: NoticeLevel, text: String) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice { id, level, text });

        let link = ctx.link().clone();
        Timeout::new(NOTICE_DURATION_MS, move || {
            link.send_message(Msg::DismissNotice(id));
        })
        .forget();
    }

    /// Keep the canvas backing store in step with the video element's
    /// rendered size so pixel coordinates line up.
    fn sync_canvas_size(&self) {
        let (Some(video), Some(canvas)) = (
            self.video_ref.cast::<HtmlVideoElement>(),
            self.canvas_ref.cast::<HtmlCanvasElement>(),
        ) else {
            return;
        };
        let width = video.client_width();
        let height = video.client_height();
        if width > 0 && height > 0 {
            if canvas.width() != width as u32 {
                canvas.set_width(width as u32);
            }
            if canvas.height() != height as u32 {
                canvas.set_height(height as u32);
            }
        }
    }

    fn paint(&self) {
        if let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() {
            zone_canvas::paint(
                &canvas,
                &self.zones,
                self.machine.zone_mode(),
                self.draw_stroke,
            );
        }
        if self.machine.view() == ViewMode::Analysis {
            if let Some(canvas) = self.chart_canvas_ref.cast::<HtmlCanvasElement>() {
                chart_canvas::paint(&canvas, &self.chart);
            }
        }
    }

    fn view_sidebar(&self, ctx: &Context<Self>) -> Html {
        let running = self.machine.is_analysis_running();
        let view = self.machine.view();
        let nav_class = |mode: ViewMode| classes!("nav-btn", (view == mode).then_some("active"));

        html! {
            <aside class="sidebar">
                <div class="user-badge">
                    <span id="usernameDisplay">{ &ctx.props().username }</span>
                </div>
                <nav>
                    <button
                        id="btn-camera"
                        class={nav_class(ViewMode::Camera)}
                        onclick={ctx.link().callback(|_| Msg::ShowCamera)}
                    >{"Camera"}</button>
                    <button
                        id="btn-video-feed"
                        class={nav_class(ViewMode::Video)}
                        onclick={ctx.link().callback(|_| Msg::ShowVideo)}
                    >{"Video Feed"}</button>
                    <button
                        id="btn-zone-manipulation"
                        class="nav-btn"
                        onclick={ctx.link().callback(|_| Msg::ToggleZoneMenu)}
                    >{"Zone Manipulation"}</button>
                    if self.zone_menu_open {
                        <div class="zone-menu-container open">
                            <button
                                id="btn-zone-create"
                                onclick={ctx.link().callback(|_| Msg::StartDrawing)}
                            >{"Create Zone"}</button>
                            <button
                                id="btn-zone-preview"
                                onclick={ctx.link().callback(|_| Msg::StartPreview)}
                            >{"Preview Zones"}</button>
                            <select id="zone-list-delete" ref={self.delete_select_ref.clone()}>
                                if self.zones.is_empty() {
                                    <option value="">{"No zones"}</option>
                                } else {
                                    { for self.zones.iter().map(|zone| html! {
                                        <option value={zone.id.clone()}>{ &zone.name }</option>
                                    }) }
                                }
                            </select>
                            <button
                                id="btn-zone-delete"
                                onclick={ctx.link().callback(|_| Msg::DeleteSelectedZone)}
                            >{"Delete Zone"}</button>
                        </div>
                    }
                    <button
                        id="btn-live-analysis"
                        class={nav_class(ViewMode::Analysis)}
                        onclick={ctx.link().callback(|_| Msg::ToggleAnalysis)}
                    >{ if running { "Stop Analysis" } else { "Live Analysis" } }</button>
                </nav>
                <button
                    id="btn-logout"
                    class="logout-btn"
                    onclick={ctx.link().callback(|_| Msg::Logout)}
                >{"Logout"}</button>
            </aside>
        }
    }

    fn view_video_surface(&self, ctx: &Context<Self>) -> Html {
        let drawing = self.machine.zone_mode() == ZoneMode::Drawing;
        let canvas_note = match self.machine.zone_mode() {
            ZoneMode::Drawing => "Click and drag to draw a rectangular zone.",
            ZoneMode::Previewing => "Previewing saved zones.",
            ZoneMode::None => "",
        };

        let on_file_change = ctx.link().batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(Msg::VideoChosen)
        });

        let onmousedown = ctx
            .link()
            .callback(|e: MouseEvent| Msg::PointerDown(event_point(&e)));
        let onmousemove = ctx
            .link()
            .callback(|e: MouseEvent| Msg::PointerMove(event_point(&e)));
        let onmouseup = ctx.link().callback(|_: MouseEvent| Msg::PointerUp);
        let onmouseleave = ctx.link().callback(|_: MouseEvent| Msg::PointerUp);

        html! {
            <div id="video-feed-view" class="video-feed-view">
                <input
                    type="file"
                    accept="video/*"
                    style="display: none;"
                    ref={self.file_input_ref.clone()}
                    onchange={on_file_change}
                />
                if let Some(url) = &self.video_url {
                    <div id="videoWrapper" class="video-wrapper" style="position: relative;">
                        <video
                            id="videoFeed"
                            src={url.clone()}
                            controls=true
                            muted=true
                            ref={self.video_ref.clone()}
                            onloadedmetadata={ctx.link().callback(|_| Msg::CanvasResize)}
                        />
                        <canvas
                            id="zoneCanvas"
                            ref={self.canvas_ref.clone()}
                            style={format!(
                                "position: absolute; top: 0; left: 0; pointer-events: {};",
                                if drawing { "auto" } else { "none" }
                            )}
                            {onmousedown}
                            {onmousemove}
                            {onmouseup}
                            {onmouseleave}
                        />
                    </div>
                } else {
                    <div
                        id="video-placeholder"
                        class="video-placeholder"
                        onclick={ctx.link().callback(|_| Msg::PickVideo)}
                    >
                        {"Click to upload a video"}
                    </div>
                }
                <p id="canvas-note" class="canvas-note">{ canvas_note }</p>
            </div>
        }
    }

    fn view_analysis_surface(&self) -> Html {
        let status = if self.machine.is_analysis_running() {
            "Running"
        } else {
            "Idle"
        };
        let alert_class = if self.alert.is_critical() {
            "alert-box alert-danger"
        } else {
            "alert-box alert-info"
        };
        let rows = analysis::occupancy_rows(&self.zones, &self.latest_zone_data);

        html! {
            <div id="live-analysis-view" class="live-analysis-view">
                <div class="analysis-header">
                    <span>{"Status: "}<span id="status-text">{ status }</span></span>
                    <span>{"Total people: "}<span id="total-people-text">{ self.current_count }</span></span>
                </div>
                <div id="alert-box" class={alert_class}>{ self.alert.banner_text() }</div>
                <div class="frames">
                    if let Some(src) = &self.overlay_src {
                        <img id="analysisOverlayFrame" class="image-frame" src={src.clone()} alt="Analysis Overlay" />
                    }
                    if let Some(src) = &self.heatmap_src {
                        <img id="analysisHeatmapFrame" class="image-frame" src={src.clone()} alt="Occupancy Heatmap" />
                    }
                </div>
                <ul id="zone-occupancy-list" class="zone-occupancy-list">
                    if rows.is_empty() {
                        <li>{"No zones defined."}</li>
                    } else {
                        { for rows.into_iter().map(|(name, count)| html! {
                            <li class="zone-occupancy-item">
                                <span class="name">{ name }</span>
                                <span class="count">{ count }</span>
                            </li>
                        }) }
                    }
                </ul>
                <canvas
                    id="population-chart"
                    width="600"
                    height="240"
                    ref={self.chart_canvas_ref.clone()}
                />
            </div>
        }
    }

    fn view_zone_name_modal(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div id="zone-name-modal" class="modal" style="display: flex;">
                <div class="modal-content">
                    <h3>{"Name this zone"}</h3>
                    <input id="zone-name-input" type="text" ref={self.modal_input_ref.clone()} />
                    <div class="modal-actions">
                        <button
                            id="modal-save-btn"
                            onclick={ctx.link().callback(|_| Msg::ModalSave)}
                        >{"Save"}</button>
                        <button
                            id="modal-cancel-btn"
                            onclick={ctx.link().callback(|_| Msg::ModalCancel)}
                        >{"Cancel"}</button>
                    </div>
                </div>
            </div>
        }
    }

    fn view_notices(&self) -> Html {
        html! {
            <div id="notification-container" class="notification-container">
                { for self.notices.iter().map(|notice| html! {
                    <div key={notice.id} class={classes!("notification", notice.level.css_class(), "show")}>
                        { &notice.text }
                    </div>
                }) }
            </div>
        }
    }
}

/// Pointer position relative to the event target's box.
fn event_point(e: &MouseEvent) -> PixelPoint {
    e.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            PixelPoint::new(
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
            )
        })
        .unwrap_or_default()
}

/// Current wall-clock time as a chart label.
fn now_label() -> String {
    let now = js_sys::Date::new_0();
    format_time_label(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Multipart upload of the chosen video file. The body is browser
/// `FormData`, which is why this lives here rather than on the client.
async fn upload_video(client: &DashboardClient, file: &web_sys::File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Http("could not build form data".into()))?;
    form.append_with_blob("video", file)
        .map_err(|_| ApiError::Http("could not attach video file".into()))?;

    let mut builder = Request::post(&client.upload_video_url());
    if let Some(token) = client.token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let response = builder
        .body(form)
        .map_err(|e| ApiError::Http(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ApiMessage>(&text)
            .ok()
            .and_then(|body| body.text().map(str::to_string))
            .unwrap_or(text);
        return Err(ApiError::Server { status, message });
    }
    Ok(())
}
