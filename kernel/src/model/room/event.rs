#[derive(Debug)]
pub struct CreateRoom {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub owner_id: String,
}
