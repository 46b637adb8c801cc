use memskip::{ByteLen, OrdComparator, SkipList, SkipListOptions};

fn main() {
    let options = SkipListOptions::default().with_max_level(6).with_seed(2025);
    let mut list = SkipList::with_options(OrdComparator, ByteLen, options).unwrap();

    for i in 0..12 {
        list.insert(format!("key{:02}", i), format!("value{}", i));
    }
    list.erase(&"key05".to_string());
    list.insert("key03".to_string(), "replaced".to_string());

    println!("{:?}", list);
    println!("{}", list.render());
    println!("{}", list.render_tree());
}
