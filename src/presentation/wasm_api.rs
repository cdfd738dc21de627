use crate::application::{FeedEngine, FeedSession};
use crate::domain::{
    chart::TextMeasurer,
    config::EngineConfig,
    errors::AppError,
    logging::LogComponent,
    state::Frame,
};
use crate::infrastructure::{
    text_metrics::{ApproxTextMeasurer, CanvasTextMeasurer},
    timers::{BrowserSpawner, GlooScheduler},
};
use crate::presentation::{
    canvas_painter::CanvasPainter, frame_listeners::FrameListeners, signals::frame_signals,
};
use crate::{log_error, log_info, log_warn};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const COMPONENT: LogComponent = LogComponent::Presentation("LiveFeedChart");

fn to_js(error: AppError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// JavaScript handle over one live feed session.
#[wasm_bindgen]
pub struct LiveFeedChart {
    config: EngineConfig,
    canvas_id: Option<String>,
    session: Option<FeedSession>,
    listeners: Rc<FrameListeners<js_sys::Function>>,
}

#[wasm_bindgen]
impl LiveFeedChart {
    /// `configJson` may be omitted for the defaults; `canvasId` enables painting.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, canvas_id: Option<String>) -> Result<LiveFeedChart, JsValue> {
        let config = match config_json {
            Some(json) => EngineConfig::from_json(&json).map_err(to_js)?,
            None => EngineConfig::default(),
        };
        Ok(Self {
            config,
            canvas_id,
            session: None,
            listeners: Rc::new(FrameListeners::new()),
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.session.as_ref().is_some_and(|session| !session.is_closed()) {
            return Err(to_js(AppError::SessionError("session already running".to_string())));
        }

        let painter = match &self.canvas_id {
            Some(id) => match CanvasPainter::from_canvas_id(id, self.config.surface()) {
                Ok(painter) => Some(painter),
                Err(e) => {
                    log_warn!(COMPONENT, "⚠️ Painting disabled: {:?}", e);
                    None
                }
            },
            None => None,
        };
        let measurer: Box<dyn TextMeasurer> = match &painter {
            Some(painter) => Box::new(CanvasTextMeasurer::new(painter.context().clone())),
            None => Box::new(ApproxTextMeasurer),
        };

        let mut engine = FeedEngine::new(self.config.clone()).map_err(to_js)?.with_measurer(measurer);
        let listeners = self.listeners.clone();
        engine.subscribe_to_frames(move |frame| {
            frame_signals().apply(frame);
            if let Some(painter) = &painter {
                if let Err(e) = painter.paint(frame) {
                    log_error!(COMPONENT, "❌ Paint failed: {:?}", e);
                }
            }
            let json = JsValue::from_str(&frame.to_json());
            listeners.publish(frame, |listener, _| {
                if let Err(e) = listener.call1(&JsValue::NULL, &json) {
                    log_error!(COMPONENT, "❌ onFrame callback threw: {:?}", e);
                }
            });
        });

        self.session = Some(FeedSession::start(engine, &GlooScheduler, &BrowserSpawner).map_err(to_js)?);
        log_info!(COMPONENT, "🚀 Live feed started ({})", self.config.variant);
        Ok(())
    }

    /// Force one live tick now.
    pub fn tick(&self) -> Result<(), JsValue> {
        match &self.session {
            Some(session) => session.tick().map_err(to_js),
            None => Err(to_js(AppError::SessionError("session not started".to_string()))),
        }
    }

    pub fn stop(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.shutdown();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(|session| !session.is_closed())
    }

    /// Register a callback receiving each frame as a JSON string.
    #[wasm_bindgen(js_name = onFrame)]
    pub fn on_frame(&self, callback: js_sys::Function) {
        self.listeners.subscribe(callback);
    }

    #[wasm_bindgen(js_name = latestFrame)]
    pub fn latest_frame(&self) -> Option<String> {
        self.listeners.latest().as_ref().map(Frame::to_json)
    }
}
