use raster565::{row_stride, Bmp565, Bmp565Header, OwnedBmp565, RasterError, Rgb565};

use crate::rand_bytes;

#[test]
fn test_create_4x3() {
  let bmp = Bmp565::try_new(4, 3).unwrap();
  assert_eq!(bmp.width(), 4);
  assert_eq!(bmp.height(), 3);
  assert_eq!(bmp.row_stride(), 8);
  assert_eq!(bmp.file_size(), 94);
  assert_eq!(bmp.image_size(), 24);
  let bytes = bmp.as_bytes();
  assert_eq!(bytes.len(), 94);
  assert_eq!(&bytes[0..2], b"BM");
  assert_eq!(u32::from_le_bytes(bytes[0x12..0x16].try_into().unwrap()), 4);
  assert_eq!(u32::from_le_bytes(bytes[0x16..0x1A].try_into().unwrap()), 3);
  assert!(bmp.pixel_data().iter().all(|&b| b == 0));
}

#[test]
fn test_create_sizes_follow_stride() {
  for (w, h) in [(1, 1), (2, 5), (3, 3), (17, 4), (240, 320)] {
    let bmp = Bmp565::try_new(w, h).unwrap();
    assert_eq!(bmp.image_size(), row_stride(w) * h, "{w}x{h}");
    assert_eq!(bmp.file_size(), 70 + row_stride(w) * h, "{w}x{h}");
    assert_eq!(bmp.as_bytes().len(), bmp.file_size() as usize);
    assert_eq!(bmp.header(), Bmp565Header::new(w, h).unwrap());
  }
}

#[test]
fn test_create_failures() {
  assert_eq!(Bmp565::try_new(0, 1).unwrap_err(), RasterError::WidthOrHeightZero);
  assert_eq!(Bmp565::try_new(1, 0).unwrap_err(), RasterError::WidthOrHeightZero);
  assert_eq!(Bmp565::try_new(0x8000_0000, 1).unwrap_err(), RasterError::CheckedMath);
}

#[test]
fn test_init_into_caller_storage() {
  let mut storage = [0xAA_u8; 100];
  {
    let mut bmp = Bmp565::try_init(&mut storage[..], 4, 3).unwrap();
    assert_eq!(bmp.file_size(), 94);
    assert!(bmp.pixel_data().iter().all(|&b| b == 0));
    assert!(bmp.set_pixel(1, 1, Rgb565::WHITE));
  }
  // screen row 1 of 3 is stored row 1, pixel 1.
  assert_eq!(&storage[70 + 8 + 2..70 + 8 + 4], &[0xFF, 0xFF]);
  // bytes past the file are left alone.
  assert_eq!(&storage[94..], &[0xAA; 6]);

  let mut short = [0_u8; 93];
  assert_eq!(Bmp565::try_init(&mut short[..], 4, 3).unwrap_err(), RasterError::InsufficientBytes);

  let arr = Bmp565::try_init([0_u8; 94], 4, 3).unwrap();
  assert_eq!(arr.as_bytes(), Bmp565::try_new(4, 3).unwrap().as_bytes());
}

#[test]
fn test_set_get_exact_for_representable_colors() {
  let mut bmp = Bmp565::try_new(5, 4).unwrap();
  let colors: [(u8, u8, u8); 4] = [(0xF8, 0xFC, 0xF8), (0, 0, 0), (0x08, 0x04, 0x10), (0x80, 0x40, 0x20)];
  for (i, &(r, g, b)) in colors.iter().enumerate() {
    let x = i as u32;
    assert!(bmp.set_pixel(x, 2, [r, g, b]));
    let got = bmp.get_pixel(x, 2).unwrap();
    assert_eq!((got.r, got.g, got.b), (r, g, b));
  }
}

#[test]
fn test_set_get_is_lossy_by_truncation() {
  let mut bmp = Bmp565::try_new(2, 2).unwrap();
  let [r, g, b] = [0xFF_u8, 0x7B, 0x0F];
  assert!(bmp.set_pixel(1, 0, Rgb565::new(r, g, b)));
  let got = bmp.get_pixel(1, 0).unwrap();
  assert_eq!((got.r, got.g, got.b), ((r >> 3) << 3, (g >> 2) << 2, (b >> 3) << 3));
}

#[test]
fn test_pixel_storage_is_bottom_up_little_endian() {
  let mut bmp = Bmp565::try_new(2, 2).unwrap();
  assert!(bmp.set_pixel(0, 0, Rgb565::new(0xFF, 0, 0)));
  assert!(bmp.set_pixel(1, 1, Rgb565::new(0, 0, 0xFF)));
  let data = bmp.pixel_data();
  // stored row 0 is screen row 1.
  assert_eq!(data, &[0_u8, 0, 0x1F, 0x00, 0x00, 0xF8, 0, 0]);
}

#[test]
fn test_rows_are_top_first_without_padding() {
  let mut bmp = Bmp565::try_new(3, 2).unwrap();
  assert!(bmp.set_pixel(2, 0, Rgb565::WHITE));
  let rows: Vec<&[Rgb565]> = bmp.rows().collect();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0], &[Rgb565::BLACK, Rgb565::BLACK, Rgb565::WHITE]);
  assert_eq!(rows[1], &[Rgb565::BLACK; 3]);
}

#[test]
fn test_set_pixel_out_of_bounds_is_a_no_op() {
  let mut bmp = Bmp565::try_new(3, 3).unwrap();
  let before = bmp.as_bytes().to_vec();
  assert!(!bmp.set_pixel(3, 0, Rgb565::WHITE));
  assert!(!bmp.set_pixel(0, 3, Rgb565::WHITE));
  assert!(!bmp.set_pixel(u32::MAX, u32::MAX, Rgb565::WHITE));
  assert_eq!(bmp.as_bytes(), &before[..]);
  assert!(bmp.get_pixel(3, 0).is_none());
  assert_eq!(bmp.get_pixel_565(0, 3), None);
}

#[test]
fn test_copy_pixels() {
  let mut src = Bmp565::try_new(3, 2).unwrap();
  src.fill(Rgb565::new(0x10, 0x20, 0x30));
  assert!(src.set_pixel(2, 1, Rgb565::WHITE));
  let mut dst = Bmp565::try_new(3, 2).unwrap();
  dst.copy_pixels_from(&src).unwrap();
  assert_eq!(dst.as_bytes(), src.as_bytes());

  let mut other = Bmp565::try_new(2, 3).unwrap();
  let before = other.as_bytes().to_vec();
  assert_eq!(other.copy_pixels_from(&src), Err(RasterError::GeometryMismatch));
  assert_eq!(other.as_bytes(), &before[..]);
}

#[test]
fn test_try_clone() {
  let mut bmp = Bmp565::try_new(7, 3).unwrap();
  assert!(bmp.draw_line(0, 0, 6, 2, Rgb565::WHITE));
  let clone: OwnedBmp565 = bmp.try_clone().unwrap();
  assert_eq!(clone.as_bytes(), bmp.as_bytes());
}

#[test]
fn test_try_from_bytes() {
  let mut bmp = Bmp565::try_new(5, 5).unwrap();
  assert!(bmp.set_pixel(4, 4, Rgb565::WHITE));
  let mut bytes = bmp.into_inner();

  let view = Bmp565::try_from_bytes(&bytes[..]).unwrap();
  assert_eq!((view.width(), view.height()), (5, 5));
  assert_eq!(view.get_pixel_565(4, 4), Some(Rgb565::WHITE));

  assert_eq!(
    Bmp565::try_from_bytes(&bytes[..bytes.len() - 1]).unwrap_err(),
    RasterError::InsufficientBytes
  );

  bytes.extend_from_slice(&[1, 2, 3]);
  let view = Bmp565::try_from_bytes(&bytes[..]).unwrap();
  assert_eq!(view.as_bytes().len(), view.file_size() as usize);

  bytes[1] = b'A';
  assert_eq!(Bmp565::try_from_bytes(&bytes[..]).unwrap_err(), RasterError::NotABmp565);
}

#[test]
fn test_random_bytes_do_not_panic() {
  for len in [0, 13, 69, 70, 71, 200, 4096] {
    for _ in 0..50 {
      let v = rand_bytes(len);
      let _ = Bmp565::try_from_bytes(&v[..]).map(|b| b.get_pixel(0, 0));
    }
  }
  // a real header followed by random pixels, cut at random-ish places.
  let header = Bmp565Header::new(9, 4).unwrap();
  for cut in [70, 71, 100, header.file_len() - 1, header.file_len()] {
    let mut v = header.to_bytes().to_vec();
    v.extend(rand_bytes(cut - 70));
    if let Ok(b) = Bmp565::try_from_bytes(&v[..]) {
      assert_eq!(cut, header.file_len());
      assert_eq!(b.rows().count(), 4);
    }
  }
}
