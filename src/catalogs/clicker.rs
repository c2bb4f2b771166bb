// src/catalogs/clicker.rs

//! Upgrade shop of the Yandex "Clicker" game.
//!
//! Rows are `(income increase per hour, cost, name)`. Prices and yields move
//! after every purchase; callers re-rank with a fresh snapshot instead of
//! editing this table.

use crate::ranker::Item;

pub const UNITS: &[(f64, f64, &str)] = &[
    (1_960.0, 50_000.0, "Бегущий по Плюсу"),
    (2_360.0, 50_000.0, "Листинг"),
    (147.0, 42_820.0, "Голубиное кабаре"),
    (210.0, 42_820.0, "Маскарад"),
    (676.0, 104_940.0, "Финансовая грамота"),
    (113.0, 64_580.0, "Философский булыжник"),
    (393.0, 106_180.0, "24 на 7"),
    (338.0, 100_910.0, "Козырное местечко"),
    (189.0, 59_950.0, "Олимпийка"),
    (1_280.0, 531_700.0, "Стильный черный пакет"),
    (316.0, 85_650.0, "Голубильдер"),
    (315.0, 56_510.0, "Цацка"),
    (421.0, 128_480.0, "Кормящая рука"),
    (723.0, 199_800.0, "Спа-набор"),
    (984.0, 235_960.0, "Секретный сейф"),
    (232.0, 55_670.0, "Пероплан"),
    (492.0, 70_780.0, "Космобатут"),
    (984.0, 353_940.0, "Журнал с анектодами"),
    (1_350.0, 322_910.0, "Клюк да Винчи"),
    (1_890.0, 428_270.0, "Покатушки"),
    (2_950.0, 589_900.0, "Чистый памятник"),
    (3_930.0, 1_170_000.0, "VR-Кандибобер"),
    (842.0, 235_540.0, "В самый раз"),
    (1_890.0, 342_610.0, "Зерновой прогноз"),
];

/// The table as owned items, ready for `Ranker::add_items`.
pub fn items() -> Vec<Item> {
    UNITS.iter().map(Item::from).collect()
}
