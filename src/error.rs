use thiserror::Error;

/// Startup-time failures. Per-frame `wgpu::SurfaceError`s are handled at the
/// render call site instead; a failed frame is skipped, not fatal.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("graphics device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
