//! The content surface collaborator: window + web content + channel.

use mayday_common::{Color, Platform, Size, SurfaceError, SurfaceId};

use crate::protocol::{InboundMessage, OutboundMessage};

/// Minimum crash window width in logical pixels.
pub const MIN_WIDTH: u32 = 600;
/// Minimum crash window height in logical pixels.
pub const MIN_HEIGHT: u32 = 500;

/// Platform title bar treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBarStyle {
    Default,
    /// Title bar hidden, traffic lights inset into the content (macOS).
    HiddenInset,
    /// No native frame at all (Windows).
    Frameless,
}

impl TitleBarStyle {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Darwin => Self::HiddenInset,
            Platform::Windows => Self::Frameless,
            Platform::Other => Self::Default,
        }
    }
}

/// Options a surface is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    pub title: String,
    pub size: Size,
    pub min_size: Size,
    /// Whether the window is visible as soon as it is created.
    pub visible: bool,
    /// Whether experimental or non-essential rendering features may be enabled.
    pub experimental_features: bool,
    /// Fill painted before the content's first frame.
    pub background: Color,
    pub title_bar: TitleBarStyle,
    /// Allow the diagnostic (devtools) view to be opened.
    pub diagnostics: bool,
}

impl SurfaceOptions {
    /// The fixed crash window policy: hidden until asked, never below
    /// 600x500, no experimental features, solid background.
    pub fn crash_window(
        title: impl Into<String>,
        requested: Size,
        background: Color,
        platform: Platform,
        diagnostics: bool,
    ) -> Self {
        let min_size = Size::new(MIN_WIDTH, MIN_HEIGHT);
        Self {
            title: title.into(),
            size: requested.at_least(min_size),
            min_size,
            visible: false,
            experimental_features: false,
            background,
            title_bar: TitleBarStyle::for_platform(platform),
            diagnostics,
        }
    }
}

/// What the surface should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    Url(String),
    Html(String),
}

impl ContentLocation {
    pub fn describe(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Html(_) => "inline html",
        }
    }
}

/// Why the content failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub url: String,
    pub reason: String,
}

/// Something that happened on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEventKind {
    StartLoading,
    FinishLoading,
    FailLoad(LoadFailure),
    Message(InboundMessage),
    Closed,
}

/// A surface event tagged with the surface it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceEvent {
    pub surface: SurfaceId,
    pub kind: SurfaceEventKind,
}

impl SurfaceEvent {
    pub fn new(surface: SurfaceId, kind: SurfaceEventKind) -> Self {
        Self { surface, kind }
    }
}

/// A live, displayable surface.
///
/// Commands return immediately; lifecycle events flow back separately as
/// [`SurfaceEvent`]s tagged with [`Surface::id`].
pub trait Surface {
    fn id(&self) -> SurfaceId;

    fn load_content(&mut self, location: &ContentLocation) -> Result<(), SurfaceError>;

    /// Deliver a message to the content. No delivery guarantee.
    fn send(&mut self, message: &OutboundMessage) -> Result<(), SurfaceError>;

    fn show(&mut self) -> Result<(), SurfaceError>;

    fn focus(&mut self) -> Result<(), SurfaceError>;

    /// Reset and lock the content zoom level.
    fn disable_zoom(&mut self) -> Result<(), SurfaceError>;

    fn open_diagnostic_view(&mut self);

    /// Release the surface immediately.
    fn destroy(self)
    where
        Self: Sized;
}

/// Creates surfaces.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create(&mut self, options: &SurfaceOptions) -> Result<Self::Surface, SurfaceError>;
}
