//! Reading and writing of destination buffers as image files
//!
//! Used by the tests to dump rendered frame buffers and diff them.
//! The destination stores pixels B,G,R while image files carry R,G,B,
//! so both directions swizzle.

use std::path::Path;

/// Read an image file into B,G,R bytes plus dimensions
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),image::ImageError> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let mut buf = img.into_raw();
    for px in buf.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    Ok((buf, w as usize, h as usize))
}

/// Write B,G,R bytes as an image file, format chosen by the extension
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), std::io::Error> {
    let mut rgb = buf.to_vec();
    for px in rgb.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    image::save_buffer(filename, &rgb, width as u32, height as u32, image::RGB(8))
}

/// Compare two image files pixel for pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    if d1.len() != d2.len() {
        println!("files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
