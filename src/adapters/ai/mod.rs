//! Execution Bridge Adapters.
//!
//! ## Available Adapters
//!
//! - `GeminiExecutionBridge` - Google Gemini text and image models
//! - `MockExecutionBridge` - Configurable mock for testing

mod gemini_bridge;
mod mock_bridge;

pub use gemini_bridge::{
    map_status, parse_generate_response, GeminiConfig, GeminiExecutionBridge, DEFAULT_BASE_URL,
    DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
};
pub use mock_bridge::{MockCall, MockError, MockExecutionBridge, MockResponse};
