/// Row-oriented read access to a single-channel image.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Pixels of row `y`, without any stride padding.
    fn row(&self, y: usize) -> &[Self::Pixel];
}
