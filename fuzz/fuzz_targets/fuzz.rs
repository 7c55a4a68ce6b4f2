#![no_main]
use libfuzzer_sys::fuzz_target;
use timecode::{Buffer, TimeStamp};

#[inline(never)]
fn test_single(data: &[u8]) {
    let Ok(t) = timecode::decode(data) else {
        return;
    };
    // Anything that decodes is canonical.
    assert!(t.is_valid());
    assert_eq!(t.encode().unwrap().as_ref(), data);

    let naive = chrono::NaiveTime::try_from(t).unwrap();
    assert_eq!(TimeStamp::from(naive), t);
    let time = time::Time::try_from(t).unwrap();
    assert_eq!(TimeStamp::from(time), t);
    let civil = jiff::civil::Time::try_from(t).unwrap();
    assert_eq!(TimeStamp::from(civil), t);
}

#[inline(never)]
fn test_buffer(data: &[u8]) {
    let mut buffer = Buffer::new();
    let decoded = match buffer.decode(data) {
        Ok(decoded) => decoded.to_vec(),
        Err(_) => return,
    };
    assert_eq!(decoded.len() * timecode::ENCODED_LEN, data.len());
    assert_eq!(buffer.encode(&decoded).unwrap(), data);
    assert_eq!(timecode::decode_all(data).unwrap(), decoded);
}

#[inline(never)]
fn test_encode(data: &[u8]) {
    let &[hour, minute, second, ..] = data else {
        return;
    };
    let t = TimeStamp {
        hour,
        minute,
        second,
    };
    match t.encode() {
        Ok(encoded) => assert_eq!(encoded.decode().unwrap(), t),
        Err(e) => {
            assert!(!t.is_valid());
            assert_eq!(e.kind(), timecode::ErrorKind::OutOfDomain);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    test_single(data);
    test_buffer(data);
    test_encode(data);
});
