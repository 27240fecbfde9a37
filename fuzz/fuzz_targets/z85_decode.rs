use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let decoded: Result<Vec<u8>, _> = z85::decode_bytes(data.iter().copied()).collect();
            if let Ok(decoded) = decoded {
                // canonical text of the decoded bytes must decode to the same bytes
                let encoded = z85::encode_to_string(&decoded).unwrap();
                assert_eq!(z85::decode_to_vec(&encoded).unwrap(), decoded);
            }
            z85::decode::<[u8; 5], _>(data.iter().copied()).for_each(drop);
        });
    }
}
