//! A recording crash window for exercising `MaydayApp` without a display.

use std::cell::RefCell;
use std::rc::Rc;

use mayday_common::{SurfaceError, SurfaceId};
use mayday_config::MaydayConfig;
use mayday_report::{
    ContentLocation, CrashReport, CrashReporter, OutboundMessage, ReportKind, ReportedError,
    Surface, SurfaceFactory, SurfaceOptions,
};

use super::core::MaydayApp;
use super::init::{observe, reporter_settings};

pub(super) type CallLog = Rc<RefCell<Vec<&'static str>>>;

pub(super) struct RecordingSurface {
    id: SurfaceId,
    log: CallLog,
}

impl Surface for RecordingSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn load_content(&mut self, _location: &ContentLocation) -> Result<(), SurfaceError> {
        self.log.borrow_mut().push("load");
        Ok(())
    }

    fn send(&mut self, message: &OutboundMessage) -> Result<(), SurfaceError> {
        self.log.borrow_mut().push(message.kind());
        Ok(())
    }

    fn show(&mut self) -> Result<(), SurfaceError> {
        self.log.borrow_mut().push("show");
        Ok(())
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.log.borrow_mut().push("focus");
        Ok(())
    }

    fn disable_zoom(&mut self) -> Result<(), SurfaceError> {
        self.log.borrow_mut().push("disable_zoom");
        Ok(())
    }

    fn open_diagnostic_view(&mut self) {
        self.log.borrow_mut().push("devtools");
    }

    fn destroy(self) {
        self.log.borrow_mut().push("destroy");
    }
}

struct RecordingFactory {
    id: SurfaceId,
    log: CallLog,
}

impl SurfaceFactory for RecordingFactory {
    type Surface = RecordingSurface;

    fn create(&mut self, _options: &SurfaceOptions) -> Result<RecordingSurface, SurfaceError> {
        Ok(RecordingSurface {
            id: self.id,
            log: Rc::clone(&self.log),
        })
    }
}

/// An app whose crash window has been launched on a recording surface.
pub(super) struct Launched {
    pub app: MaydayApp<RecordingSurface>,
    pub surface: SurfaceId,
    pub log: CallLog,
}

impl Launched {
    pub fn count(&self, call: &str) -> usize {
        self.log.borrow().iter().filter(|c| **c == call).count()
    }
}

/// Wire a reporter into a fresh app the way `launch` does.
pub(super) fn launched(config: MaydayConfig, diagnostic: bool) -> Launched {
    let report = CrashReport::new(
        ReportKind::launch_error(),
        ReportedError::new("Error", "boom"),
    );
    let mut app = MaydayApp::<RecordingSurface>::new(config, report, diagnostic);

    let mut factory = RecordingFactory {
        id: SurfaceId::new(),
        log: Rc::new(RefCell::new(Vec::new())),
    };
    let settings = reporter_settings(&app.config, app.diagnostic);
    let mut reporter = CrashReporter::new(&mut factory, app.report.clone(), settings).unwrap();
    observe(&mut reporter, &app.notices);
    reporter.start().unwrap();
    app.reporter = Some(reporter);

    Launched {
        app,
        surface: factory.id,
        log: factory.log,
    }
}
