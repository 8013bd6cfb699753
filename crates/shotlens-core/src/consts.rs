/// Smallest allowed viewport scale. Keeps `1 / scale` finite.
pub const MIN_SCALE: f32 = 0.1;

/// Largest allowed viewport scale (500%).
pub const MAX_SCALE: f32 = 5.0;

/// Scale increment applied per wheel tick or zoom button press.
pub const ZOOM_STEP: f32 = 0.1;

/// Padding (in container pixels) subtracted before fitting an image.
pub const DEFAULT_CONTAINER_PADDING: f32 = 32.0;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Upper bound of an 8-bit channel (RGB, gray, HSV saturation and value).
pub const CHANNEL_MAX: u8 = 255;

/// Upper bound of the half-angle hue channel (0..=180).
pub const HUE_MAX: u8 = 180;

/// Overlay color for pixels inside the bounds (translucent green).
pub const MATCH_OVERLAY_RGBA: [u8; 4] = [0, 255, 0, 128];

/// Overlay color for pixels outside the bounds (translucent black).
pub const UNMATCHED_OVERLAY_RGBA: [u8; 4] = [0, 0, 0, 128];

/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default tolerance used to derive lower/upper bounds from a picked color.
pub const DEFAULT_TOLERANCE: u8 = 10;

/// Largest tolerance the range tool accepts.
pub const MAX_TOLERANCE: u8 = 100;

/// Delay between the last bound edit and the re-classification it triggers.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
