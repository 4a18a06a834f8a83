mod module_stock_pool;
mod remainder_pool;

pub use module_stock_pool::ModuleStockPool;
pub use remainder_pool::{CombinationMatch, RemainderPool};
