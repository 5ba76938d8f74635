//! Presentation: draws the session, announcements and fault diagnostics.
//!
//! Everything here is a pure function of its inputs, drawn onto any
//! monochrome `embedded-graphics` target.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{
        Line,
        PrimitiveStyle,
        Rectangle,
    },
    text::{
        Alignment,
        Baseline,
        Text,
        TextStyleBuilder,
    },
};

use crate::{
    config::{
        GROUND_HEIGHT,
        SCREEN_WIDTH,
    },
    entity::Entity,
    geometry::Rect,
    session::{
        Announcement,
        Session,
    },
};

const OUTLINE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
const SOLID: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);
const FONT: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

const CENTER_X: i32 = SCREEN_WIDTH as i32 / 2;

/// Pixel box for an entity. Coordinates truncate toward zero.
fn pixels(bounds: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(bounds.x as i32, bounds.y as i32),
        Size::new(u32::from(bounds.width), u32::from(bounds.height)),
    )
}

/// Full play screen: ground, platforms, remaining coins, player, HUD.
pub fn scene<D>(target: &mut D, session: &Session) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let ground = GROUND_HEIGHT as i32;
    Line::new(Point::new(0, ground), Point::new(i32::from(SCREEN_WIDTH) - 1, ground))
        .into_styled(OUTLINE)
        .draw(target)?;

    let level = session.level();
    for platform in &level.platforms {
        pixels(platform.bounds()).into_styled(OUTLINE).draw(target)?;
    }
    for coin in level.coins.iter().filter(|c| !c.is_collected()) {
        pixels(coin.bounds()).into_styled(OUTLINE).draw(target)?;
    }

    // Hollow when facing right, solid when facing left.
    let player = session.player();
    let style = if player.facing_right { OUTLINE } else { SOLID };
    pixels(player.bounds()).into_styled(style).draw(target)?;

    hud(target, player.level, player.score)
}

/// `L{level} S:{score}` in the top-left corner.
pub fn hud<D>(target: &mut D, level: u8, score: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line = heapless::String::<20>::new();
    write!(line, "L{level} S:{score}").ok();
    Text::with_baseline(&line, Point::zero(), FONT, Baseline::Top).draw(target)?;
    Ok(())
}

/// Two centered lines on a blank screen.
fn banner<D>(target: &mut D, first: &str, second: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(first, Point::new(CENTER_X, 20), FONT, centered).draw(target)?;
    Text::with_text_style(second, Point::new(CENTER_X, 35), FONT, centered).draw(target)?;
    Ok(())
}

pub fn announcement<D>(target: &mut D, announcement: Announcement) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match announcement {
        Announcement::LevelStart(number) => {
            let mut title = heapless::String::<12>::new();
            write!(title, "Level {number}").ok();
            banner(target, &title, "Ready!")
        }
        Announcement::GameComplete => banner(target, "Congratulations!", "Game Complete!"),
    }
}

/// Short on-screen diagnostic shown while the loop backs off.
pub fn diagnostic<D>(target: &mut D, reason: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    Text::with_baseline("Error:", Point::zero(), FONT, Baseline::Top).draw(target)?;
    Text::with_baseline(reason, Point::new(0, 20), FONT, Baseline::Top).draw(target)?;
    Ok(())
}
