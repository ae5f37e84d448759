use super::food::Rgb;

/// Drawing target the game paints onto. Coordinates are the same surface
/// units as [`Cell`](super::grid::Cell).
pub trait Surface {
    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).clear_rect(x, y, width, height)
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        (**self).fill_rect(x, y, width, height, color)
    }
}
