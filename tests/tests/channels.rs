//! Channel behavior: files and buffers driven through the same calls

use std::fs;

use xorcrypt_api::Error;
use xorcrypt_symmetric::{
    Buffer, StreamCipher, StreamingDecrypt, StreamingEncrypt, SymmetricCipher, XorDecryptor,
    XorEncryptor, XorKey,
};
use xorcrypt_tests::temp_path;

#[test]
fn test_buffer_and_file_destinations_agree() {
    let key = XorKey::new("nopass").unwrap();

    let mut buffered = XorEncryptor::new(&key).unwrap();
    let mut buf = Buffer::new();
    buffered
        .bind(&mut buf)
        .feed("dfg")
        .unwrap()
        .feed(" opana")
        .unwrap()
        .feed(" popalo")
        .unwrap()
        .feed(" some buf data")
        .unwrap();

    let mut filed = XorEncryptor::new(&key).unwrap();
    let path = temp_path("dest-agree");
    filed
        .bind_path(&path)
        .unwrap()
        .feed("dfg")
        .unwrap()
        .feed(" opana")
        .unwrap()
        .feed(" popalo")
        .unwrap()
        .feed(" some buf data")
        .unwrap();
    filed.close_file().unwrap();

    let from_file = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(from_file, buf.as_slice());
    assert_eq!(
        hex::encode(&from_file),
        "0a0917411c030f011141031c1e0e1c0e5300010215411106084f14000712"
    );
}

#[test]
fn test_fragmentation_does_not_change_the_stream() {
    let key = XorKey::new("key!").unwrap();
    let plaintext = b"hello world, xor streams";

    let mut one_shot = XorEncryptor::new(&key).unwrap();
    let mut whole = Buffer::new();
    one_shot.bind(&mut whole).feed(plaintext).unwrap();

    let mut byte_wise = XorEncryptor::new(&key).unwrap();
    let mut pieces = Buffer::new();
    {
        let mut channel = byte_wise.bind(&mut pieces);
        for b in plaintext {
            channel.feed([*b]).unwrap();
        }
    }

    assert_eq!(whole.as_slice(), pieces.as_slice());
}

#[test]
fn test_cursor_continues_across_rebinds() {
    let key = XorKey::new("nopass").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();

    let mut first = Buffer::new();
    enc.bind(&mut first).feed("dfg opana popalo").unwrap();
    assert_eq!(enc.position(), 16);

    let mut second = Buffer::new();
    enc.bind(&mut second).feed(" some buf data").unwrap();
    assert_eq!(enc.position(), 30);

    let mut joined = first.into_inner();
    joined.extend_from_slice(second.as_slice());
    assert_eq!(
        hex::encode(&joined),
        "0a0917411c030f011141031c1e0e1c0e5300010215411106084f14000712"
    );

    let mut dec = XorDecryptor::new(&key).unwrap();
    let mut recovered = Vec::new();
    dec.bind(&joined[..]).drain_into(&mut recovered).unwrap();
    assert_eq!(recovered, b"dfg opana popalo some buf data");
}

#[test]
fn test_file_and_buffer_passes_share_one_keystream() {
    let key = XorKey::new("nopass").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();
    let mut dec = XorDecryptor::new(&key).unwrap();
    let path = temp_path("two-pass");

    enc.bind_path(&path).unwrap().feed("dfg opana").unwrap();
    enc.close_file().unwrap();

    let mut recovered = Vec::new();
    dec.bind_path(&path).unwrap().drain_into(&mut recovered).unwrap();
    dec.close_file().unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(recovered, b"dfg opana");

    // Cursors sit at 9 on both sides; the buffer pass keeps going.
    assert_eq!(enc.position(), 9);
    assert_eq!(dec.position(), 9);

    let mut buf = Buffer::with_capacity(32);
    enc.bind(&mut buf).feed(" popalo").unwrap();
    let mut recovered = Vec::new();
    dec.bind(&mut buf).drain_into(&mut recovered).unwrap();
    assert_eq!(recovered, b" popalo");
    assert_eq!(enc.position(), 16);
    assert_eq!(dec.position(), 16);
}

#[test]
fn test_unclosed_file_hides_buffered_data() {
    let key = XorKey::new("nopass").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();
    let path = temp_path("unclosed");

    enc.bind_path(&path)
        .unwrap()
        .feed("dfg opana popalo some buf data")
        .unwrap();

    // Still sitting in the write buffer: nothing observable on disk yet.
    let before = fs::read(&path).unwrap();
    assert!(before.is_empty());

    enc.close_file().unwrap();
    let after = fs::read(&path).unwrap();
    assert_eq!(
        hex::encode(&after),
        "0a0917411c030f011141031c1e0e1c0e5300010215411106084f14000712"
    );

    let mut dec = XorDecryptor::new(&key).unwrap();
    let mut recovered = Vec::new();
    dec.bind_path(&path).unwrap().drain_into(&mut recovered).unwrap();
    dec.close_file().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(recovered, b"dfg opana popalo some buf data");
}

#[test]
fn test_write_into_read_only_handle_fails() {
    let key = XorKey::new("nopass").unwrap();
    let path = temp_path("read-only");
    fs::write(&path, b"seed").unwrap();

    let file = fs::File::open(&path).unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();
    let mut channel = enc.bind(file);
    let err = channel
        .feed("dfg")
        .err()
        .expect("writing a read-only handle must fail");
    assert!(matches!(err, Error::Io { .. }));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_from_write_only_handle_fails() {
    let key = XorKey::new("nopass").unwrap();
    let path = temp_path("write-only");

    let file = fs::File::create(&path).unwrap();
    let mut dec = XorDecryptor::new(&key).unwrap();
    let mut out = Vec::new();
    let err = dec
        .bind(file)
        .drain_into(&mut out)
        .err()
        .expect("reading a write-only handle must fail");
    assert!(matches!(err, Error::Io { .. }));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_binding_a_missing_file_fails() {
    let key = XorKey::new("nopass").unwrap();
    let mut dec = XorDecryptor::new(&key).unwrap();

    let err = dec
        .bind_path(temp_path("missing"))
        .err()
        .expect("opening a missing file must fail");
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_drain_into_replaces_previous_contents() {
    let key = XorKey::new("nopass").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();
    let mut buf = Buffer::new();
    enc.bind(&mut buf).feed("fresh bytes").unwrap();

    let mut dec = XorDecryptor::new(&key).unwrap();
    let mut out = b"stale stale stale stale".to_vec();
    let n = dec.bind(&mut buf).drain_into(&mut out).unwrap();

    assert_eq!(n, 11);
    assert_eq!(out, b"fresh bytes");
}

#[test]
fn test_rewound_buffer_drains_again() {
    let key = XorKey::new("nopass").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();
    let mut buf = Buffer::new();
    enc.bind(&mut buf).feed("dfg opana").unwrap();

    let mut first = XorDecryptor::new(&key).unwrap();
    let mut out = Vec::new();
    first.bind(&mut buf).drain_into(&mut out).unwrap();
    assert_eq!(out, b"dfg opana");

    // The read cursor is parked at the end: a second pass sees nothing.
    let mut spent = XorDecryptor::new(&key).unwrap();
    let n = spent.bind(&mut buf).drain_into(&mut out).unwrap();
    assert_eq!(n, 0);

    buf.rewind();
    let mut again = XorDecryptor::new(&key).unwrap();
    again.bind(&mut buf).drain_into(&mut out).unwrap();
    assert_eq!(out, b"dfg opana");
}

#[test]
fn test_incremental_reads_recover_the_stream() {
    let key = XorKey::new("nopass").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();
    let mut buf = Buffer::new();
    enc.bind(&mut buf).feed("dfg opana popalo some buf data").unwrap();

    let mut dec = XorDecryptor::new(&key).unwrap();
    let mut channel = dec.bind(&mut buf);
    let mut recovered = Vec::new();
    let mut chunk = [0u8; 7];
    loop {
        let n = channel.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        recovered.extend_from_slice(&chunk[..n]);
    }

    assert_eq!(recovered, b"dfg opana popalo some buf data");
}

#[test]
fn test_finalize_returns_the_sink() {
    let key = XorKey::new("key").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();

    let mut channel = enc.bind(Buffer::new());
    channel.write(b"hello ").unwrap();
    channel.write(b"world").unwrap();
    let buf = channel.finalize().unwrap();

    assert_eq!(hex::encode(buf.as_slice()), "030015070a591c0a0b0701");

    let mut dec = XorDecryptor::new(&key).unwrap();
    let mut recovered = Vec::new();
    dec.bind(buf).drain_into(&mut recovered).unwrap();
    assert_eq!(recovered, b"hello world");
}

#[test]
fn test_close_file_without_binding_is_a_no_op() {
    let key = XorKey::new("k").unwrap();
    let mut enc = XorEncryptor::new(&key).unwrap();
    let mut dec = XorDecryptor::new(&key).unwrap();

    enc.close_file().unwrap();
    dec.close_file().unwrap();
}
