pub mod gemini;
pub mod persona;
pub mod provider;
