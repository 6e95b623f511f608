pub mod addresses;
pub mod audit_logs;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod coupons;
pub mod inventory;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod product_categories;
pub mod product_images;
pub mod products;
pub mod reviews;
pub mod roles;
pub mod shipments;
pub mod user_roles;
pub mod users;
pub mod wishlist_items;
pub mod wishlists;

pub use addresses::Entity as Addresses;
pub use audit_logs::Entity as AuditLogs;
pub use cart_items::Entity as CartItems;
pub use carts::Entity as Carts;
pub use categories::Entity as Categories;
pub use coupons::Entity as Coupons;
pub use inventory::Entity as Inventory;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use payments::Entity as Payments;
pub use product_categories::Entity as ProductCategories;
pub use product_images::Entity as ProductImages;
pub use products::Entity as Products;
pub use reviews::Entity as Reviews;
pub use roles::Entity as Roles;
pub use shipments::Entity as Shipments;
pub use user_roles::Entity as UserRoles;
pub use users::Entity as Users;
pub use wishlist_items::Entity as WishlistItems;
pub use wishlists::Entity as Wishlists;
