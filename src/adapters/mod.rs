pub mod teos10;
