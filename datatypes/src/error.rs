use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub enum Error {
    #[snafu(display("Image size must have positive dimensions, got {width}×{height}"))]
    InvalidImageSize { width: f64, height: f64 },

    #[snafu(display("Hit box tolerance must be positive, got {tolerance}"))]
    InvalidHitBoxTolerance { tolerance: f64 },

    #[snafu(display("Target name is used more than once: {name}"))]
    DuplicateTargetName { name: String },

    #[snafu(display("A photo must have at least one target"))]
    EmptyTargetList,

    InvalidUuid,
}
