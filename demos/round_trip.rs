use timecode::TimeStamp;

// Reads the clock, then prints the timestamp before and after a round trip through the codec.
fn main() -> Result<(), timecode::Error> {
    let now = TimeStamp::now_utc();
    println!("True Time:   {now}");

    let encoded = now.encode()?;
    let decoded = timecode::decode(encoded.as_ref())?;
    println!("Struct Time: {decoded}");
    Ok(())
}
