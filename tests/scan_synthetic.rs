mod common;

use common::{barcode_image, barcode_mask, barcode_width, draw_barcode};
use image::{Rgb, RgbImage};
use rust_ean::{
    DecodeError, PixelSource, Rectangle, RegionView, ScanOptions, Scanner, decode_line,
    decode_region, find_candidate_regions, scan,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn decodes_every_row_of_a_clean_mask() {
    let mask = barcode_mask("036000291452", 2, 4);
    for row in 0..4 {
        assert_eq!(decode_line(&mask, row), Ok("036000291452".to_string()));
    }
}

#[test]
fn region_decoder_reports_first_bar_row() {
    init_logging();
    let image = barcode_image(260, 20, "012345678905", 30, 5, 2, 10);
    let scanner = Scanner::new();
    assert_eq!(scanner.decode_region(&image), Ok("012345678905".to_string()));
    assert_eq!(
        rust_ean::decoder::decode_region_with(&image, scanner.options()),
        Ok((5, "012345678905".to_string()))
    );
}

#[test]
fn region_with_bad_check_digit_does_not_decode() {
    let image = barcode_image(260, 12, "036000291453", 30, 0, 2, 12);
    assert_eq!(decode_region(&image), Err(DecodeError::NoBarcodeInRegion));
}

#[test]
fn localises_a_single_barcode() {
    init_logging();
    let image = barcode_image(320, 160, "036000291452", 60, 40, 2, 80);
    let candidates = find_candidate_regions(&image).unwrap();
    assert_eq!(candidates.len(), 1);

    let area = candidates[0];
    let bars = Rectangle::new(60, 40, barcode_width(2) as i32, 80);
    assert!(area.left < bars.left && area.right() > bars.right());
    assert!(area.width > area.height);
    assert!(area.intersects(&bars));
}

#[test]
fn scan_reads_a_single_barcode() {
    let image = barcode_image(320, 160, "036000291452", 60, 40, 2, 80);
    let barcodes = scan(&image).unwrap();
    assert_eq!(barcodes.len(), 1);
    assert_eq!(barcodes[0].value, "036000291452");
    assert_eq!(barcodes[0].digits(), vec![0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5, 2]);

    // the reported row is relative to the region it was read from
    let view = RegionView::new(&image, barcodes[0].region).unwrap();
    let row = barcodes[0].row as u32;
    assert!(row < view.height());
}

#[test]
fn scan_reads_two_barcodes() {
    init_logging();
    let mut image = barcode_image(320, 320, "036000291452", 60, 40, 2, 80);
    draw_barcode(&mut image, "012345678905", 40, 200, 2, 60);

    let mut values: Vec<String> = scan(&image)
        .unwrap()
        .into_iter()
        .map(|b| b.value)
        .collect();
    values.sort();
    assert_eq!(values, vec!["012345678905", "036000291452"]);
}

#[test]
fn large_images_are_localised_on_a_downsampled_grid() {
    init_logging();
    let image = barcode_image(960, 480, "012345678905", 200, 120, 6, 240);
    let scanner = Scanner::new();

    let stages = rust_ean::detector::localise(&image, scanner.options()).unwrap();
    assert_eq!(
        (stages.greyscale.width(), stages.greyscale.height()),
        (300, 150)
    );
    assert_eq!(stages.candidates.len(), 1);
    let area = stages.candidates[0];
    assert!(area.left < 200 && area.right() > 200 + barcode_width(6) as i32);

    let found = scanner.scan_first(&image).unwrap().expect("barcode");
    assert_eq!(found.value, "012345678905");
}

#[test]
fn plain_images_have_no_barcodes() {
    let image = RgbImage::from_pixel(200, 120, Rgb([90, 140, 200]));
    assert!(scan(&image).unwrap().is_empty());
}

#[test]
fn custom_options_are_respected() {
    let image = barcode_image(320, 160, "036000291452", 60, 40, 2, 80);
    // a dark level of zero leaves nothing dark enough to be a bar
    let options = ScanOptions {
        dark_threshold: 0.0,
        ..ScanOptions::default()
    };
    let scanner = Scanner::with_options(options);
    assert!(!scanner.find_candidate_regions(&image).unwrap().is_empty());
    assert!(scanner.scan(&image).unwrap().is_empty());
}
