use crate::error::ScreenSizeError;

pub const MIN_WIDTH: u16 = 95;
pub const MIN_HEIGHT: u16 = 20;

/// Refuse to start on terminals smaller than `MIN_WIDTH` x `MIN_HEIGHT`.
pub fn check_screen_size((width, height): (u16, u16)) -> Result<(), ScreenSizeError> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(ScreenSizeError {
            width,
            height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimum_and_larger() {
        assert!(check_screen_size((95, 20)).is_ok());
        assert!(check_screen_size((200, 60)).is_ok());
    }

    #[test]
    fn rejects_narrow_or_short_terminals_with_message() {
        let err = check_screen_size((94, 40)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Screen size too small, the minimum dimensions supported are 95x20"
        );
        assert_eq!((err.width, err.height), (94, 40));
        assert!(check_screen_size((120, 19)).is_err());
    }
}
