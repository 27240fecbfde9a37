use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let data = &data[..data.len() / 4 * 4];
            let encoded = z85::encode_to_string(data).unwrap();
            let decoded = z85::decode_to_vec(&encoded).unwrap();
            assert_eq!(data, decoded);
        });
    }
}
