pub mod backend;
pub mod config;

pub use backend::chat::ChatCompletionsGenerator;
pub use backend::mock::MockGenerator;
pub use backend::TextGenerator;
pub use config::{build_generator, GeneratorBackend, GeneratorConfig};
