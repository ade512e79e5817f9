#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut coe = Vec::new();
    let summary = bin2coe::convert_stream(data, &mut coe).unwrap();
    assert_eq!(summary.bytes_discarded, data.len() % 4);

    let decoded = bin2coe::read_coe(&coe[..]).unwrap();
    assert_eq!(decoded, &data[..data.len() - data.len() % 4]);

    // Arbitrary text must never panic the reader.
    let _ = bin2coe::read_coe(data);
});
