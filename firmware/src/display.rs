//! ST7789 display: 320×170 LCD over SPI with DMA, presenting the game's
//! 128×64 monochrome frame at 2× scale.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};
use platformer::{
    Frame,
    Screen,
    frame,
};

use crate::{
    BacklightResources,
    DisplayResources,
};

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The badge's ST7789 display, ready to draw on with `embedded-graphics`.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

/// Integer scale from game pixels to panel pixels.
const SCALE: u32 = 2;
const PANEL: Size = Size::new(320, 170);
const ON: Rgb565 = Rgb565::WHITE;
const OFF: Rgb565 = Rgb565::BLACK;

impl<'a> From<DisplayResources<'a>> for Display<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(32000);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).unwrap();
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).unwrap();

        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(80)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        let buffer = crate::mk_static!([u8; 32000], [0_u8; 32000]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(170, 320)
            .invert_colors(mipidsi::options::ColorInversion::Inverted)
            .orientation(
                mipidsi::options::Orientation::new().rotate(mipidsi::options::Rotation::Deg90),
            )
            .display_offset(35, 0)
            .init(&mut delay)
            .unwrap()
    }
}

/// The panel as the game's [`Screen`]: the margin stays black and every
/// present rewrites the centered, scaled game area in one burst.
pub struct BadgeScreen<'a> {
    display: Display<'a>,
    _backlight: Output<'a>,
    area: Rectangle,
}

impl<'a> BadgeScreen<'a> {
    /// Blank the panel and switch the backlight on.
    pub fn new(mut display: Display<'a>, backlight: BacklightResources<'a>) -> Self {
        let size = Size::new(frame::WIDTH as u32 * SCALE, frame::HEIGHT as u32 * SCALE);
        let origin = Point::new(
            ((PANEL.width - size.width) / 2) as i32,
            ((PANEL.height - size.height) / 2) as i32,
        );
        display.clear(OFF).unwrap();

        Self {
            display,
            _backlight: Output::new(backlight.led, Level::High, OutputConfig::default()),
            area: Rectangle::new(origin, size),
        }
    }
}

impl<'a> Screen for BadgeScreen<'a> {
    type Error = <Display<'a> as DrawTarget>::Error;

    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let width = self.area.size.width as i32;
        let height = self.area.size.height as i32;
        let scale = SCALE as i32;

        let colors = (0..height).flat_map(|y| {
            (0..width).map(move |x| {
                if frame.pixel(x / scale, y / scale) {
                    ON
                } else {
                    OFF
                }
            })
        });
        self.display.fill_contiguous(&self.area, colors)
    }
}
