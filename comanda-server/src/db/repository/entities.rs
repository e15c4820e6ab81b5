//! Entity wiring: which collection each model lives in

use shared::models::{
    Category, CategoryBody, DiningTable, DiningTableBody, Order, OrderBody, Plate, PlateBody,
    User, UserBody,
};

use super::{Entity, Repository};
use crate::db::store::Collection;

impl Entity for User {
    const COLLECTION: Collection = Collection::User;
    const LABEL: &'static str = "User";
    type Body = UserBody;
}

impl Entity for DiningTable {
    const COLLECTION: Collection = Collection::Table;
    const LABEL: &'static str = "Table";
    type Body = DiningTableBody;
}

impl Entity for Category {
    const COLLECTION: Collection = Collection::Category;
    const LABEL: &'static str = "Category";
    type Body = CategoryBody;
}

impl Entity for Plate {
    const COLLECTION: Collection = Collection::Plate;
    const LABEL: &'static str = "Plate";
    type Body = PlateBody;
}

impl Entity for Order {
    const COLLECTION: Collection = Collection::Order;
    const LABEL: &'static str = "Order";
    type Body = OrderBody;
}

pub type UserRepository = Repository<User>;
pub type DiningTableRepository = Repository<DiningTable>;
pub type CategoryRepository = Repository<Category>;
pub type PlateRepository = Repository<Plate>;
pub type OrderRepository = Repository<Order>;
