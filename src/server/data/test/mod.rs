mod arcana;
mod equipment;
mod health;
mod hero;
mod meta;
mod news;
mod user;
