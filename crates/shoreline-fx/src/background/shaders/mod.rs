mod aurora;

pub use aurora::SHADER_AURORA;
