use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let records: Vec<[u8; 5]> = data
                .chunks_exact(5)
                .map(|r| [r[0], r[1], r[2], r[3], r[4]])
                .collect();
            let records = &records[..records.len() / 4 * 4];
            let encoded: String = z85::encode(records.iter().copied())
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();
            let decoded: Vec<[u8; 5]> = z85::decode(encoded.bytes())
                .collect::<Result<_, _>>()
                .unwrap();
            assert_eq!(records, decoded);
        });
    }
}
