mod award;
mod sqlite;
