use memokit::cache::splay::SplayCache;

fn main() {
    let mut cache = SplayCache::new();

    cache.insert(5, 50);
    cache.insert(3, 30);
    cache.insert(8, 80);

    if let Some(value) = cache.get(3) {
        println!("hit 3: {value}");
    }

    println!("root key: {:?}", cache.root_key());
    println!("nodes: {}", cache.len());
}

// Expected output:
// hit 3: 30
// root key: Some(3)
// nodes: 3
//
// Explanation: every access splays the touched node to the root, so after
// get(3) the root key is 3. Inserts never duplicate keys, so three inserts
// leave three nodes.
