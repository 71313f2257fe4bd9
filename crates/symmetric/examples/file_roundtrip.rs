//! File and buffer round trips driven through the same transform calls
//!
//! Run with logging enabled to watch the channels at work:
//!
//! ```text
//! RUST_LOG=trace cargo run --example file_roundtrip
//! ```

use std::fs;

use xorcrypt_symmetric::error::SymmetricResultExt;
use xorcrypt_symmetric::{
    Buffer, Result, StreamCipher, SymmetricCipher, XorDecryptor, XorEncryptor, XorKey,
};

fn main() -> Result<()> {
    env_logger::init();

    let key = XorKey::new("nopass")?;
    let mut enc = XorEncryptor::new(&key)?;
    let mut dec = XorDecryptor::new(&key)?;

    // Pass one: encrypt into a file, fragment by fragment.
    let path = std::env::temp_dir().join(format!("xorcrypt-demo-{}.bin", std::process::id()));
    enc.bind_path(&path)?
        .feed("dfg")?
        .feed(" opana")?
        .feed(" popalo")?
        .feed(" some buf data")?;
    enc.close_file()?;

    let mut recovered = Vec::new();
    dec.bind_path(&path)?.drain_into(&mut recovered)?;
    dec.close_file()?;
    fs::remove_file(&path).map_io_err()?;
    println!("file pass:   {}", String::from_utf8_lossy(&recovered));

    // Pass two: same transforms, an in-memory buffer this time. The key
    // cursors carry on from where the file pass left them.
    let mut buf = Buffer::with_capacity(64);
    enc.bind(&mut buf).feed("dfg opana popalo some buf data")?;
    let mut recovered = Vec::new();
    dec.bind(&mut buf).drain_into(&mut recovered)?;
    println!("buffer pass: {}", String::from_utf8_lossy(&recovered));
    println!("cursor:      enc={} dec={}", enc.position(), dec.position());

    Ok(())
}
