/// Brand cards visible at once for a viewport width in CSS pixels.
pub fn brands_per_view(viewport_width: f64) -> u32 {
    if viewport_width <= 480.0 {
        1
    } else if viewport_width <= 768.0 {
        2
    } else if viewport_width <= 1200.0 {
        3
    } else {
        4
    }
}
