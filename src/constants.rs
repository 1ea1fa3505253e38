// Port configuration
pub const DEFAULT_PORT: u16 = 4242;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

// Upload slot
pub const DEFAULT_UPLOAD_PATH: &str = "./uploaded_file";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 << 20; // 10MB, same as the upload form limit
pub const UPLOAD_FIELD_NAME: &str = "file";
/// Room on top of the file size limit for boundaries, part headers and other form fields
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

// Raster sizes
pub const RASTER_WIDTH: u32 = 256;
pub const RASTER_HEIGHT: u32 = 256;

// Hex dump layout
pub const BYTES_PER_ROW: usize = 16;
pub const ASCII_SEPARATOR: &str = " | ";
pub const NON_PRINTABLE_PLACEHOLDER: char = '.';

pub const CONFIG_FILE_NAME: &str = "byteviz.ini";
