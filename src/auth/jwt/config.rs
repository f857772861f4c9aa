// 1 hour
pub const JWT_EXP: u64 = 3600;
