use std::borrow::Cow;

/// Vertex + fragment shader pair (WGSL).
///
/// Sources are passed to the GPU untouched. Both stages must declare the
/// same uniform block at `@group(0) @binding(0)`; the vertex stage exports
/// `vs_main`, the fragment stage `fs_main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    pub label: Cow<'static, str>,
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ShaderProgram {
    pub const VERTEX_ENTRY: &'static str = "vs_main";
    pub const FRAGMENT_ENTRY: &'static str = "fs_main";

    pub fn new(
        label: impl Into<Cow<'static, str>>,
        vertex: impl Into<Cow<'static, str>>,
        fragment: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            label: label.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Full-screen vertex stage paired with a caller-supplied fragment stage.
    pub fn fullscreen(
        label: impl Into<Cow<'static, str>>,
        fragment: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(label, FULLSCREEN_VERTEX, fragment)
    }

    /// The bundled snowfall effect.
    pub fn snow() -> Self {
        Self::fullscreen("snow", SNOW_FRAGMENT)
    }
}

/// Pass-through vertex stage: `mvp * position`, forwards UVs.
pub const FULLSCREEN_VERTEX: &str = include_str!("../shaders/fullscreen.wgsl");

/// Layered snowfall fragment stage.
pub const SNOW_FRAGMENT: &str = include_str!("../shaders/snow.wgsl");
