pub const DISCRIMINATOR_LEN: usize = 8;
