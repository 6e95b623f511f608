pub mod cart_service;
pub mod catalog_service;
pub mod coupon_service;
pub mod customer_service;
pub mod inventory_service;
pub mod order_service;
pub mod payment_service;
pub mod report_service;
pub mod review_service;
pub mod shipment_service;
pub mod wishlist_service;
