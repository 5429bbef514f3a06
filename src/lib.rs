pub mod basis;
pub mod factor;
pub mod miller_rabin;
pub mod prime_gen;
