mod common;
mod dynamic;
mod matching;
mod routing;
mod usecases;
