use notifygen_derive::Observable;

#[derive(Observable)]
struct Person {
    #[observable]
    _name: String,
    #[observable]
    _age: u32,
}

fn main() {
    let _ = Person {
        _name: String::new(),
        _age: 0,
    };
}
