mod slice;
mod vec;
