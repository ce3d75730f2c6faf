//! Synthetic millimetre depth frames for the integration tests.

pub const FOREGROUND_MM: u16 = 300;
pub const BACKGROUND_MM: u16 = 900;

/// Frame with a single depth value everywhere.
pub fn uniform_frame(width: usize, height: usize, value: u16) -> Vec<u16> {
    vec![value; width * height]
}

/// Filled circle of near depth on a far background.
pub fn filled_circle_frame(
    width: usize,
    height: usize,
    cx: i32,
    cy: i32,
    radius: i32,
) -> Vec<u16> {
    let mut frame = uniform_frame(width, height, BACKGROUND_MM);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= radius * radius {
                frame[y as usize * width + x as usize] = FOREGROUND_MM;
            }
        }
    }
    frame
}

/// Open-hand stand-in: two vertical prongs joined by a palm block, with a
/// deep notch between the prong tips.
///
/// Palm spans x 20..80 at y 50..90; prongs span y 10..50 at x 20..40 and
/// x 60..80, leaving a 20 px wide, 40 px deep notch.
pub fn pronged_hand_frame(width: usize, height: usize) -> Vec<u16> {
    let mut frame = uniform_frame(width, height, BACKGROUND_MM);
    let mut fill = |x0: usize, y0: usize, x1: usize, y1: usize| {
        for y in y0..y1 {
            for x in x0..x1 {
                frame[y * width + x] = FOREGROUND_MM;
            }
        }
    };
    fill(20, 50, 80, 90); // palm
    fill(20, 10, 40, 50); // left prong
    fill(60, 10, 80, 50); // right prong
    frame
}
