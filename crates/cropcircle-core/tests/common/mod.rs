#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use cropcircle_core::intake::{ImageFile, SourceImage};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Build an image whose left half is `left` and right half is `right`.
pub fn split_image(width: u32, height: u32, left: [u8; 4], right: [u8; 4]) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba(left)
        } else {
            Rgba(right)
        }
    })
}

/// Build a smooth gradient so that every region of the image is distinct.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgba([r, g, 128, 255])
    })
}

pub fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .expect("encode PNG");
    cursor.into_inner()
}

/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn encode_jpeg(img: &RgbaImage) -> Vec<u8> {
    let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let mut cursor = Cursor::new(Vec::new());
    rgb.write_to(&mut cursor, ImageFormat::Jpeg)
        .expect("encode JPEG");
    cursor.into_inner()
}

pub fn png_file(img: &RgbaImage) -> ImageFile {
    ImageFile::new(Some("test.png".into()), "image/png", encode_png(img))
}

pub fn jpeg_file(img: &RgbaImage) -> ImageFile {
    ImageFile::new(Some("test.jpg".into()), "image/jpeg", encode_jpeg(img))
}

pub fn source(img: RgbaImage) -> SourceImage {
    SourceImage::new(img, ImageFormat::Png)
}
