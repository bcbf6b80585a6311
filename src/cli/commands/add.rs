use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AddLogic, Session};
use crate::errors::AppResult;
use crate::models::NewRecord;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        doc,
        car,
        plate,
        address,
        number,
        kind,
    } = cmd
    {
        let new = NewRecord {
            full_name: name.clone(),
            id_document: doc.clone(),
            car_model: car.clone(),
            plate: plate.clone(),
            address: address.clone(),
            number: number.clone(),
            visitor_type: kind.clone(),
        };

        let mut session = Session::open(cfg.data_path())?;
        AddLogic::apply(&mut session, new)?;
        session.commit()?;
    }

    Ok(())
}
