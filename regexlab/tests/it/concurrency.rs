use std::sync::Arc;

use regexlab::{Engine, FlagSet};

#[test]
fn test_shared_engine() {
    let engine = Arc::new(Engine::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let text = "x".repeat(i + 1);
                let res = engine
                    .substitute_all(&text, "x", "y", FlagSet::empty())
                    .unwrap();
                assert_eq!(res.count, i + 1);
                assert!(engine.validate("postal", "", "75001").unwrap().is_match());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
