use super::*;
use image::ImageFormat;

#[test]
fn test_encode_png_round_trips_pixels() {
    let rgba: Vec<u8> = (0..2 * 3 * 4).map(|i| (i * 10) as u8).collect();
    let png = encode_png(2, 3, &rgba).unwrap();

    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 3));
    assert_eq!(decoded.into_raw(), rgba);
}

#[test]
fn test_encode_png_rejects_short_buffer() {
    assert!(matches!(encode_png(4, 4, &[0; 10]), Err(Error::InvalidResource(_))));
    assert!(matches!(encode_png(0, 4, &[]), Err(Error::InvalidResource(_))));
}
