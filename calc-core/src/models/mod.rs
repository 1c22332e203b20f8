mod sex;

pub use sex::Sex;
